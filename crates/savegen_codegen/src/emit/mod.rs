//! Source emitters.
//!
//! Each emitter is a pure function from a host name and its [`SaveSet`] to one
//! [`GeneratedArtifact`]. All three lower the save set through the same
//! [`lower`] step, so the carrier fields, the save assignments and the load
//! assignments always agree on names and types.
//!
//! Output is rendered from `quote` token streams behind a fixed header and is
//! byte-identical for identical inputs.
//!
//! [`SaveSet`]: crate::extract::SaveSet

pub mod data_struct;
pub mod load_method;
pub mod marker_enum;
pub mod save_method;

use crate::config::GeneratorConfig;
use crate::error::{ConfigError, GenerateError};
use crate::extract::MemberDescriptor;
use crate::normalize::normalize;
use proc_macro2::{Ident, TokenStream};

/// First line of every emitted artifact.
pub const HEADER: &str = "// @generated by savegen. Do not edit.\n";

/// A generated source file: its logical name and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// File name the host registers the text under, e.g. `PlayerSaveData.g.rs`.
    pub logical_name: String,
    /// Rust source text.
    pub source_text: String,
}

/// Emission settings derived from a [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct EmitOptions {
    runtime: syn::Path,
    derives: Vec<syn::Path>,
    carrier_suffix: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            runtime: syn::parse_quote!(::savegen_runtime),
            derives: Vec::new(),
            carrier_suffix: crate::config::DEFAULT_CARRIER_SUFFIX.to_string(),
        }
    }
}

impl EmitOptions {
    /// Parses the emission settings out of `config`.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        let runtime = syn::parse_str(&config.runtime_path)
            .map_err(|_| ConfigError::RuntimePath(config.runtime_path.clone()))?;
        let derives = config
            .carrier_derives
            .iter()
            .map(|derive| syn::parse_str(derive).map_err(|_| ConfigError::Derive(derive.clone())))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            runtime,
            derives,
            carrier_suffix: config.carrier_suffix.clone(),
        })
    }

    /// Name of the carrier type generated for `host`.
    pub fn carrier_name(&self, host: &str) -> String {
        format!("{host}{}", self.carrier_suffix)
    }

    /// Logical name of the data struct artifact, e.g. `PlayerSaveData.g.rs`.
    pub fn data_struct_artifact(&self, host: &str) -> String {
        format!("{}.g.rs", self.carrier_name(host))
    }

    /// Logical name of the save-method artifact, e.g. `Player.ToData.g.rs`.
    pub fn save_method_artifact(&self, host: &str) -> String {
        format!("{host}.ToData.g.rs")
    }

    /// Logical name of the load-method artifact, e.g. `Player.FromData.g.rs`.
    pub fn load_method_artifact(&self, host: &str) -> String {
        format!("{host}.FromData.g.rs")
    }

    fn runtime(&self) -> &syn::Path {
        &self.runtime
    }

    fn derives(&self) -> &[syn::Path] {
        &self.derives
    }
}

/// A descriptor resolved into tokens.
pub(crate) struct LoweredMember {
    /// Identifier on the host, prefix included.
    pub source: Ident,
    /// Normalized identifier on the carrier.
    pub field: Ident,
    /// Declared type.
    pub ty: syn::Type,
}

/// Resolves every descriptor of a save set, in order.
pub(crate) fn lower(
    host: &str,
    save_set: &[MemberDescriptor],
) -> Result<Vec<LoweredMember>, GenerateError> {
    save_set
        .iter()
        .map(|member| {
            let normalized =
                normalize(&member.identifier).map_err(|_| GenerateError::MalformedIdentifier {
                    host: host.to_string(),
                    identifier: member.identifier.clone(),
                })?;
            let ty = syn::parse_str::<syn::Type>(&member.type_text).map_err(|err| {
                GenerateError::InvalidType {
                    host: host.to_string(),
                    member: member.identifier.clone(),
                    type_text: member.type_text.clone(),
                    reason: err.to_string(),
                }
            })?;

            Ok(LoweredMember {
                source: ident(host, &member.identifier)?,
                field: ident(host, normalized)?,
                ty,
            })
        })
        .collect()
}

/// Parses `name` as an identifier, falling back to a raw identifier for
/// keywords.
pub(crate) fn ident(host: &str, name: &str) -> Result<Ident, GenerateError> {
    syn::parse_str::<Ident>(name)
        .or_else(|_| syn::parse_str::<Ident>(&format!("r#{name}")))
        .map_err(|_| GenerateError::InvalidFieldName {
            host: host.to_string(),
            name: name.to_string(),
        })
}

/// Renders `path` without token spacing, e.g. `::savegen_runtime::serde`.
pub(crate) fn path_string(path: &syn::Path) -> String {
    let segments: Vec<_> = path
        .segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect();
    let joined = segments.join("::");
    if path.leading_colon.is_some() {
        format!("::{joined}")
    } else {
        joined
    }
}

pub(crate) fn render(logical_name: String, tokens: &TokenStream) -> GeneratedArtifact {
    GeneratedArtifact {
        logical_name,
        source_text: format!("{HEADER}{tokens}\n"),
    }
}
