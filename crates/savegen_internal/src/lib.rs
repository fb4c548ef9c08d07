//! # savegen Internal Library
//!
//! Re-exports the savegen crates for convenience.

/// Generation pipeline.
pub use savegen_codegen as codegen;

/// Support code called by generated methods.
pub use savegen_runtime as runtime;

/// Build-script driver.
pub use savegen_build as build;

/// Host marker attribute.
pub use savegen_macros::save_data;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use savegen_macros::save_data;
    pub use savegen_runtime::{CancellationToken, NoopLog, PersistenceLog, TracingLog, install_logger};
}
