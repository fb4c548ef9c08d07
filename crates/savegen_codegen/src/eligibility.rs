//! Eligibility for method injection.
//!
//! A host only receives the save and load methods when it is declared
//! extendable. The data carrier is emitted regardless.

use crate::tree::HostDeclaration;

/// Returns `true` if `host` lists `modifier` among its declared modifiers.
pub fn is_extendable(host: &HostDeclaration<'_>, modifier: &str) -> bool {
    host.modifiers().iter().any(|declared| declared == modifier)
}
