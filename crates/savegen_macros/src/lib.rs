//! Procedural macros for savegen host types.
//!
//! The generator reads `#[save_data]` and `#[save]` from source at build
//! time. At compile time these attributes must still be accepted by rustc;
//! this crate provides `#[save_data]`, which validates the host and strips
//! the `#[save]` field markers.

mod save_data;

use proc_macro::TokenStream;

/// Marks a struct as a save-data host.
///
/// Fields carrying `#[save]` form the save set. Pass `extendable` to have the
/// generator also emit `to_save_data`, `try_save_data`, `apply_save_data` and
/// `try_load_data` for the host.
///
/// The struct must have named fields and no generic parameters.
///
/// # Example
///
/// ```ignore
/// use savegen::save_data;
///
/// #[save_data(extendable)]
/// pub struct Player {
///     #[save]
///     _health: i32,
///     path_cache: Vec<(i32, i32)>,
/// }
/// ```
#[proc_macro_attribute]
pub fn save_data(args: TokenStream, item: TokenStream) -> TokenStream {
    match save_data::expand(args.into(), item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into(),
    }
}
