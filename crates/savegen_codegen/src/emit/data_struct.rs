//! Data carrier emitter.

use super::{EmitOptions, GeneratedArtifact, ident, lower, path_string, render};
use crate::error::GenerateError;
use crate::extract::MemberDescriptor;
use quote::quote;

/// Emits `<Host>SaveData`: one public field per descriptor, named by the
/// normalized identifier, typed by the declared type, in save set order.
///
/// The carrier derives the runtime's serde traits. Descriptors that normalize
/// to the same name are not merged; they produce colliding fields.
pub fn emit(
    host: &str,
    save_set: &[MemberDescriptor],
    options: &EmitOptions,
) -> Result<GeneratedArtifact, GenerateError> {
    let members = lower(host, save_set)?;
    let carrier = ident(host, &options.carrier_name(host))?;

    let rt = options.runtime();
    let serde_crate = format!("{}::serde", path_string(rt));
    let derives = options.derives();
    let doc = format!(" Saved state of `{host}`.");
    let naming = members
        .iter()
        .any(|member| !is_snake_case(&member.field.to_string()))
        .then(|| {
            quote! {
                #[expect(non_snake_case, reason = "field names mirror the host's members")]
            }
        });

    let fields = members.iter().map(|member| {
        let field = &member.field;
        let ty = &member.ty;
        let doc = format!(" Saved from `{}`.", member.source);
        quote! {
            #[doc = #doc]
            pub #field: #ty
        }
    });

    let tokens = quote! {
        #[doc = #doc]
        #[derive(#rt::serde::Serialize, #rt::serde::Deserialize #(, #derives)*)]
        #[serde(crate = #serde_crate)]
        #naming
        pub struct #carrier {
            #(#fields,)*
        }
    };

    Ok(render(options.data_struct_artifact(host), &tokens))
}

/// Whether rustc's `non_snake_case` lint accepts `name` as a field name.
fn is_snake_case(name: &str) -> bool {
    let name = name.trim_start_matches("r#").trim_matches('_');
    let mut previous_underscore = false;
    name.chars().all(|c| {
        let ok = !c.is_uppercase() && !(c == '_' && previous_underscore);
        previous_underscore = c == '_';
        ok
    })
}
