//! Runtime support for code generated by savegen.
//!
//! Generated carriers derive this crate's re-exported [`serde`] traits, and
//! the generated `try_save_data` / `try_load_data` methods call
//! [`save_json`] / [`load_json`] with the logger returned by [`logger`].
//!
//! Host crates pull the generated files in with [`include_save_data!`] or by
//! including the index file written by the build script.

pub mod cancel;
pub mod log;
pub mod persist;

pub use cancel::CancellationToken;
pub use log::{NoopLog, Operation, PersistenceLog, TracingLog, install_logger, logger};
pub use persist::{PersistenceError, load_json, read_json, save_json, write_json};

#[doc(hidden)]
pub use serde;

/// Includes one generated artifact from `OUT_DIR` by its logical name,
/// without the `.g.rs` extension.
///
/// ```ignore
/// savegen_runtime::include_save_data!("PlayerSaveData");
/// savegen_runtime::include_save_data!("Player.ToData");
/// savegen_runtime::include_save_data!("Player.FromData");
/// ```
#[macro_export]
macro_rules! include_save_data {
    ($name:literal) => {
        include!(concat!(env!("OUT_DIR"), "/", $name, ".g.rs"));
    };
}
