//! JSON file persistence.
//!
//! [`write_json`] and [`read_json`] return the failure. [`save_json`] and
//! [`load_json`] are the entry points used by generated code: they report
//! the failure to a [`PersistenceLog`] and collapse the result to a `bool`
//! or an `Option`.

use crate::cancel::CancellationToken;
use crate::log::{Operation, PersistenceLog};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Errors from reading or writing save data.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// The file could not be opened, written or read.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The value could not be encoded, or the file content could not be
    /// decoded into the expected carrier.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The token was cancelled before the operation started.
    #[error("operation cancelled")]
    Cancelled,
}

impl PersistenceError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Serializes `value` as pretty JSON and writes it to `path`.
///
/// The file is created or truncated. Nothing is touched if `cancel` is
/// already cancelled.
///
/// # Errors
///
/// Returns [`PersistenceError::Cancelled`] if cancelled, [`PersistenceError::Serialization`]
/// if `value` cannot be encoded, or [`PersistenceError::Io`] if the file
/// cannot be created or written.
pub async fn write_json<T: Serialize + ?Sized>(
    value: &T,
    path: &Path,
    cancel: &CancellationToken,
) -> Result<(), PersistenceError> {
    if cancel.is_cancelled() {
        return Err(PersistenceError::Cancelled);
    }

    let json = serde_json::to_string_pretty(value)?;
    let mut file = tokio::fs::File::create(path)
        .await
        .map_err(|source| PersistenceError::io(path, source))?;
    file.write_all(json.as_bytes())
        .await
        .map_err(|source| PersistenceError::io(path, source))?;
    file.flush()
        .await
        .map_err(|source| PersistenceError::io(path, source))?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "save data written");
    Ok(())
}

/// Reads `path` and decodes its JSON content as `T`.
///
/// # Errors
///
/// Returns [`PersistenceError::Cancelled`] if cancelled, [`PersistenceError::Io`]
/// if the file cannot be read, or [`PersistenceError::Serialization`] if the
/// content does not decode as `T`.
pub async fn read_json<T: DeserializeOwned>(
    path: &Path,
    cancel: &CancellationToken,
) -> Result<T, PersistenceError> {
    if cancel.is_cancelled() {
        return Err(PersistenceError::Cancelled);
    }

    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PersistenceError::io(path, source))?;
    let value = serde_json::from_str(&json)?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "save data read");
    Ok(value)
}

/// [`write_json`], reporting failure to `log`.
///
/// Returns `true` on success.
pub async fn save_json<T: Serialize + ?Sized>(
    value: &T,
    path: &Path,
    cancel: &CancellationToken,
    log: &dyn PersistenceLog,
) -> bool {
    match write_json(value, path, cancel).await {
        Ok(()) => true,
        Err(error) => {
            log.log_failure(Operation::Save, path, &error);
            false
        }
    }
}

/// [`read_json`], reporting failure to `log`.
///
/// Returns `None` on failure.
pub async fn load_json<T: DeserializeOwned>(
    path: &Path,
    cancel: &CancellationToken,
    log: &dyn PersistenceLog,
) -> Option<T> {
    match read_json(path, cancel).await {
        Ok(value) => Some(value),
        Err(error) => {
            log.log_failure(Operation::Load, path, &error);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        health: i32,
        name: String,
    }

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("savegen_persist_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[tokio::test]
    async fn write_then_read() {
        let path = scratch("write_then_read.json");
        let sample = Sample {
            health: 7,
            name: "ada".into(),
        };

        write_json(&sample, &path, &CancellationToken::new())
            .await
            .unwrap();
        let back: Sample = read_json(&path, &CancellationToken::new()).await.unwrap();

        assert_eq!(back, sample);
    }

    #[tokio::test]
    async fn cancelled_write_touches_nothing() {
        let path = scratch("cancelled_write.json");
        let _ = std::fs::remove_file(&path);
        let token = CancellationToken::new();
        token.cancel();

        let result = write_json(&Sample { health: 1, name: String::new() }, &path, &token).await;

        assert!(matches!(result, Err(PersistenceError::Cancelled)));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let path = scratch("does_not_exist.json");
        let _ = std::fs::remove_file(&path);

        let result = read_json::<Sample>(&path, &CancellationToken::new()).await;

        assert!(matches!(result, Err(PersistenceError::Io { path: p, .. }) if p == path));
    }

    #[tokio::test]
    async fn wrong_shape_is_serialization_error() {
        let path = scratch("wrong_shape.json");
        std::fs::write(&path, r#"{"health": "lots"}"#).unwrap();

        let result = read_json::<Sample>(&path, &CancellationToken::new()).await;

        assert!(matches!(result, Err(PersistenceError::Serialization(_))));
    }
}
