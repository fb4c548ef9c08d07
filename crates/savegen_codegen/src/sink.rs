//! Artifact sinks.
//!
//! A sink receives every artifact the pipeline produces and hands it to the
//! host: [`MemorySink`] keeps them in memory, [`DirSink`] writes them as files.

use crate::emit::{GeneratedArtifact, HEADER};
use crate::error::SinkError;
use std::path::{Path, PathBuf};

/// Default name of the index file written by [`DirSink::write_index`].
pub const DEFAULT_INDEX_FILE: &str = "savegen.g.rs";

/// Receives generated artifacts.
pub trait ArtifactSink {
    /// Registers one artifact under its logical name.
    fn register(&mut self, artifact: GeneratedArtifact) -> Result<(), SinkError>;

    /// Removes an artifact registered earlier. Unknown names are ignored.
    fn withdraw(&mut self, logical_name: &str);

    /// Registers `artifacts` as a unit: if any is rejected, those already
    /// registered by this call are withdrawn again.
    ///
    /// Returns the registered logical names, in order.
    fn register_all(
        &mut self,
        artifacts: Vec<GeneratedArtifact>,
    ) -> Result<Vec<String>, SinkError> {
        let mut names: Vec<String> = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let name = artifact.logical_name.clone();
            if let Err(error) = self.register(artifact) {
                for registered in names.iter().rev() {
                    self.withdraw(registered);
                }
                return Err(error);
            }
            names.push(name);
        }
        Ok(names)
    }
}

impl<S: ArtifactSink + ?Sized> ArtifactSink for &mut S {
    fn register(&mut self, artifact: GeneratedArtifact) -> Result<(), SinkError> {
        (**self).register(artifact)
    }

    fn withdraw(&mut self, logical_name: &str) {
        (**self).withdraw(logical_name);
    }

    fn register_all(
        &mut self,
        artifacts: Vec<GeneratedArtifact>,
    ) -> Result<Vec<String>, SinkError> {
        (**self).register_all(artifacts)
    }
}

/// Keeps artifacts in registration order.
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: Vec<GeneratedArtifact>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered artifacts, in order.
    pub fn artifacts(&self) -> &[GeneratedArtifact] {
        &self.artifacts
    }

    /// Logical names, in order.
    pub fn names(&self) -> Vec<&str> {
        self.artifacts
            .iter()
            .map(|artifact| artifact.logical_name.as_str())
            .collect()
    }

    /// Source text registered under `logical_name`.
    pub fn get(&self, logical_name: &str) -> Option<&str> {
        self.artifacts
            .iter()
            .find(|artifact| artifact.logical_name == logical_name)
            .map(|artifact| artifact.source_text.as_str())
    }

    /// Consumes the sink, returning its artifacts.
    pub fn into_artifacts(self) -> Vec<GeneratedArtifact> {
        self.artifacts
    }
}

impl ArtifactSink for MemorySink {
    fn register(&mut self, artifact: GeneratedArtifact) -> Result<(), SinkError> {
        if self.get(&artifact.logical_name).is_some() {
            return Err(SinkError::Duplicate(artifact.logical_name));
        }
        self.artifacts.push(artifact);
        Ok(())
    }

    fn withdraw(&mut self, logical_name: &str) {
        self.artifacts
            .retain(|artifact| artifact.logical_name != logical_name);
    }
}

/// Writes each artifact to `<dir>/<logical name>`.
#[derive(Debug)]
pub struct DirSink {
    dir: PathBuf,
    registered: Vec<String>,
}

impl DirSink {
    /// Creates a sink writing into `dir`. The directory is created when the
    /// first artifact or the index is written.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            registered: Vec::new(),
        }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Logical names written so far, in order.
    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    /// Writes `<dir>/<index_name>`, which `include!`s every registered
    /// artifact by absolute path, so consumers only include one file.
    pub fn write_index(&self, index_name: &str) -> Result<PathBuf, SinkError> {
        let mut text = String::from(HEADER);
        for name in &self.registered {
            let path = self.dir.join(name);
            let literal = proc_macro2::Literal::string(&path.to_string_lossy());
            text.push_str(&format!("include!({literal});\n"));
        }

        self.create_dir()?;
        let path = self.dir.join(index_name);
        write_file(&path, &text)?;
        tracing::debug!(path = %path.display(), artifacts = self.registered.len(), "index written");
        Ok(path)
    }

    fn create_dir(&self) -> Result<(), SinkError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| SinkError::Io {
            path: self.dir.clone(),
            source,
        })
    }
}

impl ArtifactSink for DirSink {
    fn register(&mut self, artifact: GeneratedArtifact) -> Result<(), SinkError> {
        if self.registered.contains(&artifact.logical_name) {
            return Err(SinkError::Duplicate(artifact.logical_name));
        }

        self.create_dir()?;
        let path = self.dir.join(&artifact.logical_name);
        write_file(&path, &artifact.source_text)?;

        tracing::debug!(path = %path.display(), "artifact written");
        self.registered.push(artifact.logical_name);
        Ok(())
    }

    fn withdraw(&mut self, logical_name: &str) {
        let Some(position) = self.registered.iter().position(|name| name == logical_name) else {
            return;
        };
        self.registered.remove(position);

        let path = self.dir.join(logical_name);
        if let Err(error) = std::fs::remove_file(&path) {
            tracing::warn!(path = %path.display(), %error, "withdrawn artifact not removed");
        } else {
            tracing::debug!(path = %path.display(), "artifact withdrawn");
        }
    }
}

/// Writes `text` unless the file already holds it, so unchanged artifacts
/// keep their modification time.
fn write_file(path: &Path, text: &str) -> Result<(), SinkError> {
    if std::fs::read_to_string(path).is_ok_and(|existing| existing == text) {
        return Ok(());
    }
    std::fs::write(path, text).map_err(|source| SinkError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(name: &str, text: &str) -> GeneratedArtifact {
        GeneratedArtifact {
            logical_name: name.to_string(),
            source_text: text.to_string(),
        }
    }

    fn temp_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "savegen-sink-{label}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        sink.register(artifact("B.g.rs", "b")).unwrap();
        sink.register(artifact("A.g.rs", "a")).unwrap();
        assert_eq!(sink.names(), ["B.g.rs", "A.g.rs"]);
        assert_eq!(sink.get("A.g.rs"), Some("a"));
    }

    #[test]
    fn memory_sink_rejects_duplicates() {
        let mut sink = MemorySink::new();
        sink.register(artifact("A.g.rs", "a")).unwrap();
        let err = sink.register(artifact("A.g.rs", "again")).unwrap_err();
        assert!(matches!(err, SinkError::Duplicate(name) if name == "A.g.rs"));
    }

    #[test]
    fn dir_sink_writes_files_and_index() {
        let dir = temp_dir("index");
        let mut sink = DirSink::new(&dir);
        sink.register(artifact("PlayerSaveData.g.rs", "struct A;"))
            .unwrap();
        sink.register(artifact("Player.ToData.g.rs", "impl A {}"))
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.join("PlayerSaveData.g.rs")).unwrap(),
            "struct A;"
        );

        let index = sink.write_index(DEFAULT_INDEX_FILE).unwrap();
        let text = std::fs::read_to_string(index).unwrap();
        assert!(text.starts_with(HEADER));
        assert_eq!(text.matches("include!").count(), 2);
        assert!(text.contains("PlayerSaveData.g.rs"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn register_all_withdraws_on_rejection() {
        let mut sink = MemorySink::new();
        sink.register(artifact("Player.FromData.g.rs", "taken")).unwrap();

        let err = sink
            .register_all(vec![
                artifact("PlayerSaveData.g.rs", "struct A;"),
                artifact("Player.ToData.g.rs", "impl A {}"),
                artifact("Player.FromData.g.rs", "impl A {}"),
            ])
            .unwrap_err();

        assert!(matches!(err, SinkError::Duplicate(name) if name == "Player.FromData.g.rs"));
        assert_eq!(sink.names(), ["Player.FromData.g.rs"]);
        assert_eq!(sink.get("Player.FromData.g.rs"), Some("taken"));
    }

    #[test]
    fn dir_sink_withdraw_removes_file_and_index_entry() {
        let dir = temp_dir("withdraw");
        let mut sink = DirSink::new(&dir);
        sink.register(artifact("PlayerSaveData.g.rs", "struct A;"))
            .unwrap();
        sink.register(artifact("Door.g.rs", "struct D;")).unwrap();

        sink.withdraw("PlayerSaveData.g.rs");
        sink.withdraw("Unknown.g.rs");

        assert_eq!(sink.registered(), ["Door.g.rs"]);
        assert!(!dir.join("PlayerSaveData.g.rs").exists());
        let index = std::fs::read_to_string(sink.write_index(DEFAULT_INDEX_FILE).unwrap()).unwrap();
        assert!(!index.contains("PlayerSaveData"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn dir_sink_writes_empty_index_without_artifacts() {
        let dir = temp_dir("empty").join("out");
        let sink = DirSink::new(&dir);

        let index = sink.write_index(DEFAULT_INDEX_FILE).unwrap();

        assert_eq!(std::fs::read_to_string(index).unwrap(), HEADER);
        std::fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }

    #[test]
    fn dir_sink_reports_unwritable_dir() {
        let dir = temp_dir("blocked");
        std::fs::write(&dir, "not a directory").unwrap();

        let mut sink = DirSink::new(dir.join("nested"));
        let err = sink.register(artifact("A.g.rs", "a")).unwrap_err();
        assert!(matches!(err, SinkError::Io { .. }));
        assert!(sink.registered().is_empty());

        std::fs::remove_file(&dir).unwrap();
    }
}
