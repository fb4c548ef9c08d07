//! Error types for the generation pipeline.

use std::path::PathBuf;

/// Error raised while generating the artifacts of a single host declaration.
///
/// Generation errors are local: the pipeline records them against the failing
/// host and carries on with its siblings.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A member identifier contains no alphabetic character, so no public
    /// field name can be derived from it.
    #[error("identifier '{identifier}' on '{host}' has no alphabetic character")]
    MalformedIdentifier {
        /// The host declaration owning the member.
        host: String,
        /// The offending identifier.
        identifier: String,
    },

    /// A member's declared type text is not a valid Rust type.
    #[error("member '{member}' on '{host}' has invalid type '{type_text}': {reason}")]
    InvalidType {
        /// The host declaration owning the member.
        host: String,
        /// The member identifier.
        member: String,
        /// The declared type text.
        type_text: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A (normalized) name cannot be used as a Rust identifier.
    #[error("'{name}' on '{host}' is not a valid identifier")]
    InvalidFieldName {
        /// The host declaration owning the member.
        host: String,
        /// The rejected name.
        name: String,
    },

    /// The host declares generic parameters, which emitted code cannot name.
    #[error("'{host}' declares generic parameters, which are not supported")]
    UnsupportedGenerics {
        /// The host declaration.
        host: String,
    },

    /// The host is declared inside a module of the scanned file. Generated
    /// code is included at the top level of that file, outside the module.
    #[error("'{host}' is declared in module '{module_path}'; hosts must be top-level items")]
    NestedHost {
        /// The host declaration.
        host: String,
        /// Module path within the scanned file, `::`-separated.
        module_path: String,
    },

    /// The host is not a struct.
    #[error("'{host}' is an enum; only structs can carry save data")]
    UnsupportedKind {
        /// The host declaration.
        host: String,
    },

    /// The artifact sink rejected an artifact.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Error raised by an [`ArtifactSink`](crate::sink::ArtifactSink).
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Writing an artifact to disk failed.
    #[error("failed to write artifact '{}': {source}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An artifact with the same logical name was already registered.
    #[error("artifact '{0}' registered twice")]
    Duplicate(String),
}

/// Invalid [`GeneratorConfig`](crate::config::GeneratorConfig).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A marker or modifier name is empty.
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// The declaration marker and the member marker are the same name.
    #[error("declaration marker and member marker are both '{0}'")]
    AliasedMarkers(String),

    /// The runtime path is not a valid Rust path.
    #[error("runtime path '{0}' is not a valid path")]
    RuntimePath(String),

    /// An extra carrier derive is not a valid Rust path.
    #[error("carrier derive '{0}' is not a valid path")]
    Derive(String),

    /// A marker enum name or placeholder is not a valid identifier.
    #[error("marker enum identifier '{0}' is not valid")]
    MarkerEnum(String),
}

/// Error loading a declaration set from an external front end.
#[derive(Debug, thiserror::Error)]
pub enum DeclarationError {
    /// The JSON dump could not be decoded.
    #[error("invalid declaration dump: {0}")]
    Json(#[from] serde_json::Error),
}
