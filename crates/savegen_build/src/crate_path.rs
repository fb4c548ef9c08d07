//! Runtime crate path resolution.
//!
//! Emitted code names the runtime by path. Which path is valid depends on
//! how the consuming crate depends on savegen, so it is read from the
//! consumer's `Cargo.toml`.

use proc_macro_crate::{FoundCrate, crate_name};

const RUNTIME: &str = "savegen_runtime";
const UMBRELLA: &str = "savegen";

/// Returns the path emitted code should use for the runtime crate.
///
/// Resolution order:
/// 1. Direct dependency on `savegen_runtime` (possibly renamed).
/// 2. The `savegen` umbrella crate (`::<savegen>::runtime`).
/// 3. Fallback to `::savegen_runtime` (a compile error will point the user
///    to the missing dependency).
pub fn resolve_runtime_path() -> String {
    match crate_name(RUNTIME) {
        Ok(FoundCrate::Itself) => "crate".to_string(),
        Ok(FoundCrate::Name(found)) => format!("::{found}"),
        Err(_) => match crate_name(UMBRELLA) {
            Ok(FoundCrate::Name(found)) => format!("::{found}::runtime"),
            Ok(FoundCrate::Itself) => "crate::runtime".to_string(),
            Err(error) => {
                tracing::debug!(%error, "runtime crate not found, using default path");
                format!("::{RUNTIME}")
            }
        },
    }
}
