//! Member extraction.

use crate::matcher::{Annotated, Marker};
use crate::tree::HostDeclaration;

/// One saved member: its declared type text and source identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
    /// Declared type, as written in source.
    pub type_text: String,
    /// Source identifier, prefix included.
    pub identifier: String,
}

impl MemberDescriptor {
    /// Creates a descriptor.
    pub fn new(type_text: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            type_text: type_text.into(),
            identifier: identifier.into(),
        }
    }
}

/// Saved members of one host, in declaration order.
///
/// The order is significant: generated carrier fields mirror it, which keeps
/// generated files stable across runs.
pub type SaveSet = Vec<MemberDescriptor>;

/// Collects the members of `host` annotated with `marker`.
///
/// A field statement declaring several variables yields one descriptor per
/// variable, left to right, all sharing the statement's type. A property
/// yields exactly one descriptor. Unannotated members are skipped; a host
/// without annotated members yields an empty set.
pub fn extract(host: &HostDeclaration<'_>, marker: &Marker) -> SaveSet {
    host.members()
        .iter()
        .filter(|member| member.has_marker(marker))
        .flat_map(|member| {
            member
                .identifiers()
                .iter()
                .map(|identifier| MemberDescriptor::new(member.type_text(), identifier.as_str()))
        })
        .collect()
}
