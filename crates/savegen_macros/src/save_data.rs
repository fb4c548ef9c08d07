//! The `#[save_data]` attribute.

use darling::FromMeta;
use darling::ast::NestedMeta;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{Fields, ItemStruct};

/// Name of the field marker stripped from the host.
const MEMBER_MARKER: &str = "save";

/// Parsed attribute arguments.
#[derive(Debug, Default, FromMeta)]
struct SaveDataArgs {
    /// Emit the save and load methods for this host.
    #[darling(default)]
    extendable: bool,
}

/// Validates the host and strips `#[save]` from its fields.
///
/// For extendable hosts, also asserts that every saved field type is
/// `Clone`, since the generated `to_save_data` clones each one.
pub(crate) fn expand(args: TokenStream, item: TokenStream) -> darling::Result<TokenStream> {
    let list = NestedMeta::parse_meta_list(args)?;
    let args = SaveDataArgs::from_list(&list)?;
    let mut item: ItemStruct = syn::parse2(item)?;

    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "#[save_data] hosts cannot have generic parameters",
        )
        .into());
    }

    let fields = match &mut item.fields {
        Fields::Named(fields) => fields,
        Fields::Unit => return Ok(item.into_token_stream()),
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new_spanned(
                fields,
                "#[save_data] hosts must use named fields",
            )
            .into());
        }
    };

    let mut errors = darling::Error::accumulator();
    let mut saved_types = Vec::new();
    for field in &mut fields.named {
        let mut saved = false;
        for attr in &field.attrs {
            if !attr.path().is_ident(MEMBER_MARKER) {
                continue;
            }
            if !matches!(attr.meta, syn::Meta::Path(_)) {
                errors.push(syn::Error::new_spanned(attr, "#[save] takes no arguments").into());
            }
            saved = true;
        }
        if saved {
            saved_types.push(field.ty.clone());
        }
        field.attrs.retain(|attr| !attr.path().is_ident(MEMBER_MARKER));
    }
    errors.finish()?;

    let clone_check = if args.extendable && !saved_types.is_empty() {
        let asserts = saved_types.iter().map(|ty| {
            quote_spanned! {ty.span()=> assert_clone::<#ty>(); }
        });
        quote! {
            const _: fn() = || {
                fn assert_clone<T: ::core::clone::Clone>() {}
                #(#asserts)*
            };
        }
    } else {
        TokenStream::new()
    };

    Ok(quote! {
        #item
        #clone_check
    })
}
