//! Annotation-driven save-data generation.
//!
//! Mark a struct with `#[save_data]` and its fields with `#[save]`; a build
//! script running [`build::Builder`] then emits a serializable
//! `<Host>SaveData` carrier and, for `#[save_data(extendable)]` hosts, the
//! async `try_save_data` / `try_load_data` methods.

pub use savegen_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use savegen_internal::prelude::*;
}
