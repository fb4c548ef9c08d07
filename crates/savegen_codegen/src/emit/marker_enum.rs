//! Marker enum emitter.
//!
//! Lists the names of marked type declarations as variants of one enum, after
//! a default placeholder variant.

use super::{GeneratedArtifact, ident, render};
use crate::config::MarkerEnum;
use crate::error::GenerateError;
use quote::quote;

/// Emits `<EnumName>.g.rs` with the placeholder followed by `variants`.
pub fn emit(marker_enum: &MarkerEnum, variants: &[&str]) -> Result<GeneratedArtifact, GenerateError> {
    let enum_name = &marker_enum.enum_name;
    let name = ident(enum_name, enum_name)?;
    let placeholder = ident(enum_name, &marker_enum.placeholder)?;
    let idents = variants
        .iter()
        .map(|variant| ident(enum_name, variant))
        .collect::<Result<Vec<_>, _>>()?;
    let doc = format!(" Every type marked `#[{}]`.", marker_enum.marker);
    let variants = idents.iter().map(|variant| {
        let doc = format!(" `{variant}`.");
        quote! {
            #[doc = #doc]
            #variant
        }
    });

    let tokens = quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum #name {
            /// No type selected.
            #[default]
            #placeholder,
            #(#variants,)*
        }
    };

    Ok(render(format!("{enum_name}.g.rs"), &tokens))
}
