//! Front end over parsed Rust source.

use super::{DeclKind, DeclarationSet, MemberDecl, TypeDecl};
use crate::matcher::Marker;
use quote::ToTokens;
use syn::punctuated::Punctuated;
use syn::{Attribute, Fields, Item, ItemEnum, ItemStruct, Meta, Token, Visibility};

impl DeclarationSet {
    /// Builds a declaration set from a parsed Rust source file.
    ///
    /// Structs and enums are collected in source order, descending into inline
    /// `mod` blocks. Annotation names are the last path segment of each
    /// attribute. Modifiers are the visibility keyword plus every bare word
    /// listed inside an attribute named `declaration_marker`, so
    /// `#[save_data(extendable)] pub struct Player` has the modifiers
    /// `pub` and `extendable`.
    ///
    /// ```
    /// use savegen_codegen::matcher::Marker;
    /// use savegen_codegen::tree::DeclarationSet;
    ///
    /// let file = syn::parse_file(r#"
    ///     #[save_data(extendable)]
    ///     pub struct Player {
    ///         #[save]
    ///         _health: i32,
    ///     }
    /// "#).unwrap();
    ///
    /// let set = DeclarationSet::from_syn_file(&file, &Marker::from("save_data"));
    /// let player = &set.declarations()[0];
    /// assert_eq!(player.modifiers(), ["pub", "extendable"]);
    /// assert_eq!(player.members()[0].identifiers(), ["_health"]);
    /// ```
    pub fn from_syn_file(file: &syn::File, declaration_marker: &Marker) -> Self {
        let mut declarations = Vec::new();
        collect_items(
            &file.items,
            &mut Vec::new(),
            declaration_marker,
            &mut declarations,
        );
        Self::new(declarations)
    }
}

fn collect_items(
    items: &[Item],
    module_path: &mut Vec<String>,
    marker: &Marker,
    out: &mut Vec<TypeDecl>,
) {
    for item in items {
        match item {
            Item::Struct(item) => out.push(struct_decl(item, module_path, marker)),
            Item::Enum(item) => out.push(enum_decl(item, module_path, marker)),
            Item::Mod(item) => {
                if let Some((_, inner)) = &item.content {
                    module_path.push(item.ident.to_string());
                    collect_items(inner, module_path, marker, out);
                    module_path.pop();
                }
            }
            _ => {}
        }
    }
}

fn struct_decl(item: &ItemStruct, module_path: &[String], marker: &Marker) -> TypeDecl {
    let name = item.ident.to_string();
    let mut decl = header(
        TypeDecl::new(name.as_str()),
        &item.attrs,
        &item.vis,
        module_path,
        marker,
    );
    if !item.generics.params.is_empty() {
        decl = decl.generic();
    }

    match &item.fields {
        Fields::Named(fields) => {
            for field in &fields.named {
                let Some(ident) = &field.ident else {
                    continue;
                };
                let mut member =
                    MemberDecl::field(field.ty.to_token_stream().to_string(), [ident.to_string()]);
                for annotation in annotation_names(&field.attrs) {
                    member = member.annotated(annotation);
                }
                decl = decl.member(member);
            }
        }
        Fields::Unnamed(_) => {
            tracing::warn!(
                host = %name,
                "tuple struct fields have no identifiers; members skipped"
            );
        }
        Fields::Unit => {}
    }

    decl
}

fn enum_decl(item: &ItemEnum, module_path: &[String], marker: &Marker) -> TypeDecl {
    let mut decl = header(
        TypeDecl::new(item.ident.to_string()).with_kind(DeclKind::Enum),
        &item.attrs,
        &item.vis,
        module_path,
        marker,
    );
    if !item.generics.params.is_empty() {
        decl = decl.generic();
    }
    decl
}

fn header(
    mut decl: TypeDecl,
    attrs: &[Attribute],
    vis: &Visibility,
    module_path: &[String],
    marker: &Marker,
) -> TypeDecl {
    decl = decl.in_module(module_path.to_vec());

    for annotation in annotation_names(attrs) {
        decl = decl.annotated(annotation);
    }

    if !matches!(vis, Visibility::Inherited) {
        decl = decl.modifier("pub");
    }

    for attr in attrs {
        if attr_name(attr).as_deref() == Some(marker.as_str()) {
            for word in marker_words(attr) {
                decl = decl.modifier(word);
            }
        }
    }

    decl
}

fn attr_name(attr: &Attribute) -> Option<String> {
    attr.path()
        .segments
        .last()
        .map(|segment| segment.ident.to_string())
}

fn annotation_names(attrs: &[Attribute]) -> impl Iterator<Item = String> + '_ {
    attrs.iter().filter_map(attr_name)
}

/// Bare words inside `#[marker(word, other = ..)]`; only `word` is returned.
fn marker_words(attr: &Attribute) -> Vec<String> {
    if !matches!(attr.meta, Meta::List(_)) {
        return Vec::new();
    }

    match attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated) {
        Ok(metas) => metas
            .iter()
            .filter_map(|meta| match meta {
                Meta::Path(path) => path.get_ident().map(ToString::to_string),
                _ => None,
            })
            .collect(),
        Err(err) => {
            tracing::warn!(error = %err, "unparsable marker arguments ignored");
            Vec::new()
        }
    }
}
