//! Save-data code generation for savegen.
//!
//! Scans type declarations for a marker annotation, extracts their
//! marker-annotated members and emits, per host type:
//!
//! - `<Host>SaveData.g.rs`: a serde-serializable carrier struct mirroring the
//!   saved members, with naming prefixes stripped (`_health` → `health`);
//! - `<Host>.ToData.g.rs`: `to_save_data` and the async `try_save_data`;
//! - `<Host>.FromData.g.rs`: `apply_save_data` and the async `try_load_data`.
//!
//! The two method artifacts are only emitted for hosts declared extendable.
//!
//! # Modules
//!
//! - [`tree`] - Declaration model and its front ends (`syn`, JSON)
//! - [`matcher`] - Marker annotation matching
//! - [`extract`] - Save set extraction
//! - [`normalize`] - Public field naming
//! - [`eligibility`] - Method injection gate
//! - [`emit`] - Emitters
//! - [`sink`] - Artifact sinks
//! - [`pipeline`] - The driver tying the above together
//! - [`config`] - Generator configuration
//! - [`error`] - Error types

pub mod config;
pub mod eligibility;
pub mod emit;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod normalize;
pub mod pipeline;
pub mod sink;
pub mod tree;

pub use config::{GeneratorConfig, MarkerEnum};
pub use emit::GeneratedArtifact;
pub use error::{ConfigError, DeclarationError, GenerateError, SinkError};
pub use pipeline::{GenerationReport, Pipeline};
pub use sink::{ArtifactSink, DirSink, MemorySink};
pub use tree::DeclarationSet;
