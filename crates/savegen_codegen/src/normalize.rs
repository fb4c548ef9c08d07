//! Identifier normalization.
//!
//! Internal field names often carry a non-letter prefix (`_health`) or a
//! naming-convention prefix ending in one (`m_Speed`). The generated carrier
//! exposes the name that starts at the first alphabetic character after
//! such a leading run.

/// An identifier with no alphabetic character.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("identifier '{0}' has no alphabetic character")]
pub struct MalformedIdentifier(pub String);

/// Derives the public field name for `identifier`.
///
/// Leading characters are discarded up to the first alphabetic character; the
/// rest is returned unchanged. The member-variable convention `m_` is part of
/// the prefix as well, as long as a letter follows it, so `m_Speed` maps to
/// `Speed`.
///
/// ```
/// use savegen_codegen::normalize::normalize;
///
/// assert_eq!(normalize("_health").unwrap(), "health");
/// assert_eq!(normalize("m_Speed").unwrap(), "Speed");
/// assert_eq!(normalize("health").unwrap(), "health");
/// assert!(normalize("123").is_err());
/// ```
pub fn normalize(identifier: &str) -> Result<&str, MalformedIdentifier> {
    let start = first_letter(identifier)
        .ok_or_else(|| MalformedIdentifier(identifier.to_string()))?;
    let mut name = &identifier[start..];

    while let Some(rest) = name.strip_prefix("m_")
        && let Some(next) = first_letter(rest)
    {
        name = &rest[next..];
    }

    Ok(name)
}

fn first_letter(text: &str) -> Option<usize> {
    text.char_indices()
        .find(|(_, c)| c.is_alphabetic())
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_underscore_prefix() {
        assert_eq!(normalize("_health").unwrap(), "health");
        assert_eq!(normalize("__ammo").unwrap(), "ammo");
    }

    #[test]
    fn strips_member_prefix() {
        assert_eq!(normalize("m_Speed").unwrap(), "Speed");
        assert_eq!(normalize("_m_speed").unwrap(), "speed");
        assert_eq!(normalize("m_2x").unwrap(), "x");
    }

    #[test]
    fn member_prefix_without_letter_is_kept() {
        assert_eq!(normalize("m_").unwrap(), "m_");
        assert_eq!(normalize("m_42").unwrap(), "m_42");
    }

    #[test]
    fn plain_identifier_unchanged() {
        assert_eq!(normalize("health").unwrap(), "health");
        assert_eq!(normalize("maxHealth").unwrap(), "maxHealth");
    }

    #[test]
    fn keeps_characters_after_first_letter() {
        assert_eq!(normalize("_slot_2").unwrap(), "slot_2");
        assert_eq!(normalize("_1st_place").unwrap(), "st_place");
    }

    #[test]
    fn no_letter_is_malformed() {
        assert_eq!(
            normalize("123"),
            Err(MalformedIdentifier("123".to_string()))
        );
        assert!(normalize("").is_err());
        assert!(normalize("___").is_err());
    }

    #[test]
    fn malformed_identifier_message() {
        let error = normalize("_42").unwrap_err();
        assert_eq!(
            error.to_string(),
            "identifier '_42' has no alphabetic character"
        );
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn unicode_letters_count() {
        assert_eq!(normalize("_état").unwrap(), "état");
    }

    proptest! {
        #[test]
        fn prefix_is_stripped(prefix in "[_0-9]{0,4}", name in "[a-zA-Z][a-zA-Z0-9_]{0,12}") {
            prop_assume!(!name.starts_with("m_"));
            let identifier = format!("{prefix}{name}");
            prop_assert_eq!(normalize(&identifier).unwrap(), name.as_str());
        }

        #[test]
        fn normalized_starts_with_letter(identifier in "[_0-9a-zA-Z]{1,16}") {
            if let Ok(name) = normalize(&identifier) {
                prop_assert!(name.chars().next().is_some_and(char::is_alphabetic));
                prop_assert!(identifier.ends_with(name));
            }
        }

        #[test]
        fn normalization_is_idempotent(identifier in "[_0-9]{0,3}[a-zA-Z][a-zA-Z0-9_]{0,10}") {
            let once = normalize(&identifier).unwrap();
            prop_assert_eq!(normalize(once).unwrap(), once);
        }
    }
}
