//! Read-only view over a program's type declarations.
//!
//! Front ends build a [`DeclarationSet`]; the pipeline only ever borrows from
//! it. Two front ends ship with this crate:
//!
//! - [`DeclarationSet::from_syn_file`] walks a parsed Rust source file.
//! - [`DeclarationSet::from_json`] decodes a dump produced by an external
//!   syntax walker, which may describe multi-variable fields and properties.
//!
//! # Example
//!
//! ```
//! use savegen_codegen::tree::{DeclarationSet, MemberDecl, TypeDecl};
//!
//! let set = DeclarationSet::new(vec![
//!     TypeDecl::new("Player")
//!         .annotated("save_data")
//!         .modifier("extendable")
//!         .member(MemberDecl::field("i32", ["_health"]).annotated("save")),
//! ]);
//! assert_eq!(set.declarations().len(), 1);
//! ```

mod syn_source;

use crate::error::DeclarationError;
use crate::matcher::{Annotated, Marker};
use serde::{Deserialize, Serialize};

/// All type declarations visible to one pipeline run, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationSet {
    declarations: Vec<TypeDecl>,
}

impl DeclarationSet {
    /// Creates a set from declarations in source order.
    pub fn new(declarations: Vec<TypeDecl>) -> Self {
        Self { declarations }
    }

    /// Decodes a declaration dump produced by an external front end.
    ///
    /// ```
    /// use savegen_codegen::tree::DeclarationSet;
    ///
    /// let set = DeclarationSet::from_json(r#"{
    ///     "declarations": [{
    ///         "name": "Enemy",
    ///         "annotations": ["save_data"],
    ///         "modifiers": ["public", "partial"],
    ///         "members": [
    ///             { "kind": "field", "type_text": "i32", "identifiers": ["_hp", "_mp"], "annotations": ["save"] }
    ///         ]
    ///     }]
    /// }"#).unwrap();
    /// assert_eq!(set.declarations()[0].members()[0].identifiers(), ["_hp", "_mp"]);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, DeclarationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes the set in the format accepted by [`from_json`](Self::from_json).
    pub fn to_json(&self) -> Result<String, DeclarationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Appends the declarations of `other`, keeping source order.
    pub fn extend(&mut self, other: DeclarationSet) {
        self.declarations.extend(other.declarations);
    }

    /// All declarations, in source order.
    pub fn declarations(&self) -> &[TypeDecl] {
        &self.declarations
    }

    /// Borrowed views over the declarations carrying `marker`.
    pub fn hosts<'a>(&'a self, marker: &'a Marker) -> impl Iterator<Item = HostDeclaration<'a>> {
        self.declarations
            .iter()
            .filter(move |decl| decl.has_marker(marker))
            .map(HostDeclaration::new)
    }
}

/// Shape of a type declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    /// A struct or class.
    #[default]
    Struct,
    /// An enum.
    Enum,
}

/// One type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    name: String,
    #[serde(default)]
    kind: DeclKind,
    #[serde(default)]
    module_path: Vec<String>,
    #[serde(default)]
    annotations: Vec<String>,
    #[serde(default)]
    modifiers: Vec<String>,
    #[serde(default)]
    has_generics: bool,
    #[serde(default)]
    members: Vec<MemberDecl>,
}

impl TypeDecl {
    /// Creates an unannotated struct declaration with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DeclKind::Struct,
            module_path: Vec::new(),
            annotations: Vec::new(),
            modifiers: Vec::new(),
            has_generics: false,
            members: Vec::new(),
        }
    }

    /// Sets the declaration kind.
    #[must_use]
    pub fn with_kind(mut self, kind: DeclKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the enclosing module path.
    #[must_use]
    pub fn in_module(mut self, path: Vec<String>) -> Self {
        self.module_path = path;
        self
    }

    /// Attaches an annotation.
    #[must_use]
    pub fn annotated(mut self, name: impl Into<String>) -> Self {
        self.annotations.push(name.into());
        self
    }

    /// Adds a declared modifier.
    #[must_use]
    pub fn modifier(mut self, name: impl Into<String>) -> Self {
        self.modifiers.push(name.into());
        self
    }

    /// Marks the declaration as generic.
    #[must_use]
    pub fn generic(mut self) -> Self {
        self.has_generics = true;
        self
    }

    /// Appends a member.
    #[must_use]
    pub fn member(mut self, member: MemberDecl) -> Self {
        self.members.push(member);
        self
    }

    /// Identifier of the declaration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declaration kind.
    pub fn kind(&self) -> DeclKind {
        self.kind
    }

    /// Enclosing inline modules, outermost first.
    pub fn module_path(&self) -> &[String] {
        &self.module_path
    }

    /// Declared modifiers.
    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    /// Whether the declaration has generic parameters.
    pub fn has_generics(&self) -> bool {
        self.has_generics
    }

    /// Members in source order.
    pub fn members(&self) -> &[MemberDecl] {
        &self.members
    }
}

impl Annotated for TypeDecl {
    fn annotation_names(&self) -> impl Iterator<Item = &str> {
        self.annotations.iter().map(String::as_str)
    }
}

/// Field or property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// A field statement, possibly declaring several variables.
    Field,
    /// A property with a single name.
    Property,
}

/// One member statement of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDecl {
    kind: MemberKind,
    type_text: String,
    identifiers: Vec<String>,
    #[serde(default)]
    annotations: Vec<String>,
}

impl MemberDecl {
    /// A field statement declaring `identifiers`, all of type `type_text`.
    pub fn field<I, S>(type_text: impl Into<String>, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: MemberKind::Field,
            type_text: type_text.into(),
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            annotations: Vec::new(),
        }
    }

    /// A property named `identifier`.
    pub fn property(type_text: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Property,
            type_text: type_text.into(),
            identifiers: vec![identifier.into()],
            annotations: Vec::new(),
        }
    }

    /// Attaches an annotation.
    #[must_use]
    pub fn annotated(mut self, name: impl Into<String>) -> Self {
        self.annotations.push(name.into());
        self
    }

    /// Field or property.
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Declared type text.
    pub fn type_text(&self) -> &str {
        &self.type_text
    }

    /// Declared identifiers, left to right.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}

impl Annotated for MemberDecl {
    fn annotation_names(&self) -> impl Iterator<Item = &str> {
        self.annotations.iter().map(String::as_str)
    }
}

/// A borrowed view of one annotated host declaration.
///
/// Scoped to a single pipeline run; never mutated.
#[derive(Debug, Clone, Copy)]
pub struct HostDeclaration<'a> {
    decl: &'a TypeDecl,
}

impl<'a> HostDeclaration<'a> {
    /// Wraps a declaration.
    pub fn new(decl: &'a TypeDecl) -> Self {
        Self { decl }
    }

    /// Identifier of the host.
    pub fn name(&self) -> &'a str {
        &self.decl.name
    }

    /// Declared modifiers.
    pub fn modifiers(&self) -> &'a [String] {
        &self.decl.modifiers
    }

    /// Members in source order.
    pub fn members(&self) -> &'a [MemberDecl] {
        &self.decl.members
    }

    /// Whether the host has generic parameters.
    pub fn has_generics(&self) -> bool {
        self.decl.has_generics
    }

    /// The underlying declaration.
    pub fn decl(&self) -> &'a TypeDecl {
        self.decl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hosts_filters_by_declaration_marker() {
        let set = DeclarationSet::new(vec![
            TypeDecl::new("Player").annotated("save_data"),
            TypeDecl::new("Camera"),
            TypeDecl::new("Door").annotated("save"),
            TypeDecl::new("Chest").annotated("save_data"),
        ]);

        let marker = Marker::from("save_data");
        let names: Vec<_> = set.hosts(&marker).map(|h| h.name()).collect();
        assert_eq!(names, ["Player", "Chest"]);
    }

    #[test]
    fn json_round_trip_keeps_shape() {
        let set = DeclarationSet::new(vec![
            TypeDecl::new("Enemy")
                .annotated("save_data")
                .modifier("partial")
                .member(MemberDecl::field("int", ["_a", "_b"]).annotated("save"))
                .member(MemberDecl::property("float", "Speed")),
        ]);

        let json = set.to_json().unwrap();
        let decoded = DeclarationSet::from_json(&json).unwrap();
        assert_eq!(decoded, set);
    }

    #[test]
    fn json_defaults_optional_fields() {
        let set = DeclarationSet::from_json(
            r#"{ "declarations": [ { "name": "Crate" } ] }"#,
        )
        .unwrap();
        let decl = &set.declarations()[0];
        assert_eq!(decl.kind(), DeclKind::Struct);
        assert!(decl.members().is_empty());
        assert!(!decl.has_generics());
    }

    #[test]
    fn json_rejects_garbage() {
        assert!(DeclarationSet::from_json("{ not json").is_err());
    }

    #[test]
    fn extend_appends_in_order() {
        let mut first = DeclarationSet::new(vec![TypeDecl::new("A")]);
        first.extend(DeclarationSet::new(vec![TypeDecl::new("B")]));
        let names: Vec<_> = first.declarations().iter().map(TypeDecl::name).collect();
        assert_eq!(names, ["A", "B"]);
    }
}
