//! Load-method emitter.

use super::{EmitOptions, GeneratedArtifact, ident, lower, render};
use crate::error::GenerateError;
use crate::extract::MemberDescriptor;
use quote::quote;

/// Emits an `impl <Host>` block with `apply_save_data` and `try_load_data`.
///
/// `apply_save_data` is the inverse of `to_save_data`: each carrier field is
/// moved back into the member under its source identifier. `try_load_data`
/// reads and decodes a file through the runtime, applies it and reports
/// success as a `bool`; a missing file or undecodable text yields `false`.
pub fn emit(
    host: &str,
    save_set: &[MemberDescriptor],
    options: &EmitOptions,
) -> Result<GeneratedArtifact, GenerateError> {
    let members = lower(host, save_set)?;
    let host_ident = ident(host, host)?;
    let carrier = ident(host, &options.carrier_name(host))?;
    let rt = options.runtime();

    let body = if members.is_empty() {
        quote! { let _ = data; }
    } else {
        let assignments = members.iter().map(|member| {
            let field = &member.field;
            let source = &member.source;
            quote! { self.#source = data.#field; }
        });
        quote! { #(#assignments)* }
    };

    let tokens = quote! {
        impl #host_ident {
            /// Overwrites the saved members with the values in `data`.
            pub fn apply_save_data(&mut self, data: #carrier) {
                #body
            }

            /// Reads `path` as JSON and applies it.
            ///
            /// Returns `false`, leaving `self` untouched, if the file could not
            /// be read or decoded or `cancel` was already cancelled; the
            /// failure is reported to the installed logger.
            pub async fn try_load_data(
                &mut self,
                path: impl ::core::convert::AsRef<::std::path::Path>,
                cancel: &#rt::CancellationToken,
            ) -> bool {
                let log = #rt::logger();
                match #rt::load_json::<#carrier>(path.as_ref(), cancel, &*log).await {
                    ::core::option::Option::Some(data) => {
                        self.apply_save_data(data);
                        true
                    }
                    ::core::option::Option::None => false,
                }
            }
        }
    };

    Ok(render(options.load_method_artifact(host), &tokens))
}
