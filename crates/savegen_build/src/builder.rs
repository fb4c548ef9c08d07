//! The build-script driver.

use crate::crate_path::resolve_runtime_path;
use crate::error::BuildError;
use crate::logging::TracingSetup;
use savegen_codegen::sink::DEFAULT_INDEX_FILE;
use savegen_codegen::{DeclarationSet, DirSink, GenerationReport, GeneratorConfig, Pipeline};
use std::path::{Path, PathBuf};

/// Runs save-data generation from a build script.
///
/// # Example
///
/// ```no_run
/// // build.rs
/// fn main() {
///     savegen_build::Builder::new()
///         .source("src/entities.rs")
///         .generate()
///         .unwrap();
/// }
/// ```
///
/// ```ignore
/// // src/entities.rs
/// include!(concat!(env!("OUT_DIR"), "/savegen.g.rs"));
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    sources: Vec<PathBuf>,
    out_dir: Option<PathBuf>,
    config: Option<GeneratorConfig>,
    index_file: String,
    fail_on_error: bool,
    emit_rerun_if_changed: bool,
    tracing: Option<TracingSetup>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            out_dir: None,
            config: None,
            index_file: DEFAULT_INDEX_FILE.to_string(),
            fail_on_error: true,
            emit_rerun_if_changed: true,
            tracing: None,
        }
    }
}

impl Builder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a Rust source file to scan.
    #[must_use]
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(path.into());
        self
    }

    /// Adds several Rust source files to scan.
    #[must_use]
    pub fn sources<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.sources.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Sets the output directory. Defaults to `$OUT_DIR`.
    #[must_use]
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    /// Sets the generator configuration.
    ///
    /// Without one, the default configuration is used with the runtime path
    /// resolved from the consuming crate's `Cargo.toml`.
    #[must_use]
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the index file name. Defaults to `savegen.g.rs`.
    #[must_use]
    pub fn index_file(mut self, name: impl Into<String>) -> Self {
        self.index_file = name.into();
        self
    }

    /// Whether a host failure makes [`generate`](Self::generate) return an
    /// error. Defaults to `true`.
    #[must_use]
    pub fn fail_on_error(mut self, enabled: bool) -> Self {
        self.fail_on_error = enabled;
        self
    }

    /// Whether to print `cargo:rerun-if-changed` for each source. Defaults
    /// to `true`.
    #[must_use]
    pub fn emit_rerun_if_changed(mut self, enabled: bool) -> Self {
        self.emit_rerun_if_changed = enabled;
        self
    }

    /// Installs a `tracing` subscriber before generating.
    #[must_use]
    pub fn tracing(mut self, setup: TracingSetup) -> Self {
        self.tracing = Some(setup);
        self
    }

    /// Scans the sources, writes every artifact and the index file, and
    /// prints cargo directives.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or unparsable sources, invalid configuration, a
    /// missing output directory, or an unwritable index. If `fail_on_error`
    /// is set, also fails when any host failed; artifacts of healthy hosts
    /// are written regardless.
    pub fn generate(self) -> Result<GenerationReport, BuildError> {
        if let Some(setup) = &self.tracing {
            setup.init();
        }

        let config = match self.config {
            Some(config) => config,
            None => GeneratorConfig::default().with_runtime_path(resolve_runtime_path()),
        };
        let pipeline = Pipeline::new(config)?;

        let out_dir = match self.out_dir {
            Some(dir) => dir,
            None => std::env::var_os("OUT_DIR")
                .map(PathBuf::from)
                .ok_or(BuildError::MissingOutDir)?,
        };

        if self.emit_rerun_if_changed {
            for source in &self.sources {
                cargo_directive(&format!("rerun-if-changed={}", source.display()));
            }
        }

        let declarations = scan(&self.sources, pipeline.config())?;

        let mut sink = DirSink::new(&out_dir);
        let report = pipeline.run(&declarations, &mut sink);
        let index = sink.write_index(&self.index_file)?;

        for line in failure_warnings(&report) {
            cargo_directive(&line);
        }

        tracing::info!(
            out_dir = %out_dir.display(),
            index = %index.display(),
            artifacts = report.artifact_count(),
            failures = report.failures.len(),
            "savegen build finished"
        );

        if self.fail_on_error && !report.is_success() {
            let hosts = report
                .failures
                .iter()
                .map(|failure| failure.host.clone())
                .collect();
            return Err(BuildError::HostFailures { hosts });
        }

        Ok(report)
    }
}

/// Parses every source and merges their declarations in order.
fn scan(sources: &[PathBuf], config: &GeneratorConfig) -> Result<DeclarationSet, BuildError> {
    let mut declarations = DeclarationSet::default();
    for path in sources {
        declarations.extend(scan_file(path, config)?);
    }
    Ok(declarations)
}

fn scan_file(path: &Path, config: &GeneratorConfig) -> Result<DeclarationSet, BuildError> {
    let text = std::fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file = syn::parse_file(&text).map_err(|source| BuildError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let declarations = DeclarationSet::from_syn_file(&file, &config.declaration_marker);
    tracing::debug!(
        path = %path.display(),
        declarations = declarations.declarations().len(),
        "source scanned"
    );
    Ok(declarations)
}

/// `warning=` directives, one per failed host.
fn failure_warnings(report: &GenerationReport) -> Vec<String> {
    report
        .failures
        .iter()
        .map(|failure| {
            let message = format!("savegen: {}: {}", failure.host, failure.error);
            format!("warning={}", message.replace('\n', " "))
        })
        .collect()
}

#[expect(clippy::print_stdout, reason = "cargo reads build script directives from stdout")]
fn cargo_directive(line: &str) {
    println!("cargo:{line}");
}
