//! Build-script driver for savegen.
//!
//! Scans Rust sources with `syn`, runs the generation pipeline and writes
//! the artifacts plus an index file into `OUT_DIR`:
//!
//! ```no_run
//! // build.rs
//! fn main() {
//!     savegen_build::Builder::new()
//!         .source("src/entities.rs")
//!         .tracing(savegen_build::TracingSetup::new())
//!         .generate()
//!         .unwrap();
//! }
//! ```

pub mod builder;
pub mod crate_path;
pub mod error;
pub mod logging;

pub use builder::Builder;
pub use crate_path::resolve_runtime_path;
pub use error::BuildError;
pub use logging::{TracingFormat, TracingSetup};
pub use savegen_codegen::{GenerationReport, GeneratorConfig, MarkerEnum};
