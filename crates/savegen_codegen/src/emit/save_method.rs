//! Save-method emitter.

use super::{EmitOptions, GeneratedArtifact, ident, lower, render};
use crate::error::GenerateError;
use crate::extract::MemberDescriptor;
use quote::quote;

/// Emits an `impl <Host>` block with `to_save_data` and `try_save_data`.
///
/// `to_save_data` reads each member under its source identifier and writes it
/// to the carrier under the normalized name. `try_save_data` serializes that
/// carrier to a file through the runtime and reports success as a `bool`; any
/// failure is logged through the installed persistence logger and swallowed.
pub fn emit(
    host: &str,
    save_set: &[MemberDescriptor],
    options: &EmitOptions,
) -> Result<GeneratedArtifact, GenerateError> {
    let members = lower(host, save_set)?;
    let host_ident = ident(host, host)?;
    let carrier = ident(host, &options.carrier_name(host))?;
    let rt = options.runtime();

    let assignments = members.iter().map(|member| {
        let field = &member.field;
        let source = &member.source;
        quote! { #field: ::core::clone::Clone::clone(&self.#source) }
    });

    let tokens = quote! {
        impl #host_ident {
            /// Copies the saved members into a new carrier.
            pub fn to_save_data(&self) -> #carrier {
                #carrier {
                    #(#assignments,)*
                }
            }

            /// Writes the saved members to `path` as JSON.
            ///
            /// Returns `false` if the write failed or `cancel` was already
            /// cancelled; the failure is reported to the installed logger.
            pub async fn try_save_data(
                &self,
                path: impl ::core::convert::AsRef<::std::path::Path>,
                cancel: &#rt::CancellationToken,
            ) -> bool {
                let data = self.to_save_data();
                let log = #rt::logger();
                #rt::save_json(&data, path.as_ref(), cancel, &*log).await
            }
        }
    };

    Ok(render(options.save_method_artifact(host), &tokens))
}
