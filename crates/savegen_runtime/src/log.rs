//! Failure reporting for generated persistence methods.
//!
//! Generated `try_save_data` / `try_load_data` never return an error; they
//! report it to the installed [`PersistenceLog`] and return `false`. The
//! hosting program picks the logger once at start-up:
//!
//! ```
//! use savegen_runtime::{TracingLog, install_logger};
//!
//! install_logger(TracingLog);
//! ```
//!
//! Until then [`NoopLog`] is used.

use crate::persist::PersistenceError;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::{Arc, LazyLock};

/// The persistence operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Serialize and write.
    Save,
    /// Read and deserialize.
    Load,
}

impl Operation {
    /// Lowercase name, for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Load => "load",
        }
    }
}

/// Receives persistence failures.
pub trait PersistenceLog: Send + Sync {
    /// Called once per failed operation.
    fn log_failure(&self, operation: Operation, path: &Path, error: &PersistenceError);
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl PersistenceLog for NoopLog {
    fn log_failure(&self, _operation: Operation, _path: &Path, _error: &PersistenceError) {}
}

/// Reports failures as `tracing` error events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl PersistenceLog for TracingLog {
    fn log_failure(&self, operation: Operation, path: &Path, error: &PersistenceError) {
        tracing::error!(
            operation = operation.as_str(),
            path = %path.display(),
            %error,
            "save data {} failed",
            operation.as_str()
        );
    }
}

static LOGGER: LazyLock<RwLock<Arc<dyn PersistenceLog>>> =
    LazyLock::new(|| RwLock::new(Arc::new(NoopLog)));

/// Replaces the process-wide logger used by generated code.
pub fn install_logger(log: impl PersistenceLog + 'static) {
    *LOGGER.write() = Arc::new(log);
}

/// The process-wide logger used by generated code.
pub fn logger() -> Arc<dyn PersistenceLog> {
    LOGGER.read().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_names() {
        assert_eq!(Operation::Save.as_str(), "save");
        assert_eq!(Operation::Load.as_str(), "load");
    }

    #[test]
    fn loggers_accept_reports() {
        let error = PersistenceError::Cancelled;
        NoopLog.log_failure(Operation::Save, Path::new("a.json"), &error);
        TracingLog.log_failure(Operation::Load, Path::new("a.json"), &error);
    }
}
