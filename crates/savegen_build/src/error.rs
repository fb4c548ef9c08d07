//! Build host errors.

use savegen_codegen::{ConfigError, SinkError};
use std::path::PathBuf;

/// Errors from [`Builder::generate`](crate::Builder::generate).
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A source file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The source file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A source file is not valid Rust.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// The source file.
        path: PathBuf,
        /// The parse error.
        #[source]
        source: syn::Error,
    },

    /// The generator configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The index file could not be written.
    #[error("failed to write index: {0}")]
    Index(#[from] SinkError),

    /// No output directory was given and `OUT_DIR` is not set.
    #[error("no output directory: set one with `out_dir` or run from a build script")]
    MissingOutDir,

    /// One or more hosts failed to generate. Artifacts of the other hosts
    /// were written.
    #[error("save data generation failed for: {}", hosts.join(", "))]
    HostFailures {
        /// Names of the failed hosts.
        hosts: Vec<String>,
    },
}
