//! The generation pipeline.
//!
//! For every declaration carrying the declaration marker:
//!
//! 1. extract the save set (members carrying the member marker);
//! 2. emit the data carrier;
//! 3. if the host is extendable, emit the save and load methods;
//! 4. register the artifacts with the sink.
//!
//! All of a host's artifacts are built before any is registered. A failure is
//! recorded against that host only and the remaining hosts are still
//! processed. Marker enums are emitted after all hosts.
//!
//! # Example
//!
//! ```
//! use savegen_codegen::config::GeneratorConfig;
//! use savegen_codegen::pipeline::Pipeline;
//! use savegen_codegen::sink::MemorySink;
//! use savegen_codegen::tree::{DeclarationSet, MemberDecl, TypeDecl};
//!
//! let set = DeclarationSet::new(vec![
//!     TypeDecl::new("Player")
//!         .annotated("save_data")
//!         .modifier("extendable")
//!         .member(MemberDecl::field("i32", ["_health"]).annotated("save")),
//! ]);
//!
//! let pipeline = Pipeline::new(GeneratorConfig::default()).unwrap();
//! let mut sink = MemorySink::new();
//! let report = pipeline.run(&set, &mut sink);
//!
//! assert!(report.is_success());
//! assert_eq!(
//!     sink.names(),
//!     ["PlayerSaveData.g.rs", "Player.ToData.g.rs", "Player.FromData.g.rs"]
//! );
//! ```

use crate::config::{GeneratorConfig, MarkerEnum};
use crate::eligibility::is_extendable;
use crate::emit::{EmitOptions, GeneratedArtifact, data_struct, load_method, marker_enum, save_method};
use crate::error::{ConfigError, GenerateError};
use crate::extract::extract;
use crate::matcher::Annotated;
use crate::sink::ArtifactSink;
use crate::tree::{DeclKind, DeclarationSet, HostDeclaration};

/// Artifacts built for one host, not yet registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostArtifacts {
    /// Host name.
    pub host: String,
    /// Whether the save and load methods were emitted.
    pub eligible: bool,
    /// Data carrier, then (if eligible) save and load methods.
    pub artifacts: Vec<GeneratedArtifact>,
}

/// A host whose artifacts were registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOutcome {
    /// Host name.
    pub host: String,
    /// Whether the save and load methods were emitted.
    pub eligible: bool,
    /// Logical names registered for this host.
    pub artifacts: Vec<String>,
}

/// A host, or marker enum, that failed to generate.
#[derive(Debug)]
pub struct HostFailure {
    /// Host (or marker enum) name.
    pub host: String,
    /// Cause.
    pub error: GenerateError,
}

/// Result of one pipeline run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Successfully generated hosts, in source order.
    pub hosts: Vec<HostOutcome>,
    /// Logical names of the emitted marker enums.
    pub marker_enums: Vec<String>,
    /// Local failures, in source order.
    pub failures: Vec<HostFailure>,
}

impl GenerationReport {
    /// `true` if nothing failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of artifacts registered.
    pub fn artifact_count(&self) -> usize {
        self.hosts.iter().map(|host| host.artifacts.len()).sum::<usize>() + self.marker_enums.len()
    }

    /// Outcome for `host`, if it generated successfully.
    pub fn host(&self, host: &str) -> Option<&HostOutcome> {
        self.hosts.iter().find(|outcome| outcome.host == host)
    }
}

/// Runs save-data generation over declaration sets.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: GeneratorConfig,
    options: EmitOptions,
}

impl Pipeline {
    /// Validates `config` and prepares a pipeline.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let options = EmitOptions::from_config(&config)?;
        Ok(Self { config, options })
    }

    /// The configuration in use.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Emission settings in use.
    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Generates every host in `declarations` and registers the artifacts
    /// with `sink`.
    pub fn run<S>(&self, declarations: &DeclarationSet, sink: &mut S) -> GenerationReport
    where
        S: ArtifactSink + ?Sized,
    {
        let mut report = GenerationReport::default();

        for host in declarations.hosts(&self.config.declaration_marker) {
            let _span = tracing::debug_span!("host", name = host.name()).entered();

            match self.generate_host(&host).and_then(|built| register(sink, built)) {
                Ok(outcome) => report.hosts.push(outcome),
                Err(error) => {
                    tracing::warn!(host = host.name(), %error, "host skipped");
                    report.failures.push(HostFailure {
                        host: host.name().to_string(),
                        error,
                    });
                }
            }
        }

        for wanted in &self.config.marker_enums {
            match emit_marker_enum(declarations, wanted, sink) {
                Ok(name) => report.marker_enums.push(name),
                Err(error) => {
                    tracing::warn!(enum_name = %wanted.enum_name, %error, "marker enum skipped");
                    report.failures.push(HostFailure {
                        host: wanted.enum_name.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            hosts = report.hosts.len(),
            artifacts = report.artifact_count(),
            failures = report.failures.len(),
            "save data generation finished"
        );
        report
    }

    /// Builds the artifacts for a single host without registering them.
    pub fn generate_host(&self, host: &HostDeclaration<'_>) -> Result<HostArtifacts, GenerateError> {
        let name = host.name();
        if host.has_generics() {
            return Err(GenerateError::UnsupportedGenerics {
                host: name.to_string(),
            });
        }
        if host.decl().kind() != DeclKind::Struct {
            return Err(GenerateError::UnsupportedKind {
                host: name.to_string(),
            });
        }
        if !host.decl().module_path().is_empty() {
            return Err(GenerateError::NestedHost {
                host: name.to_string(),
                module_path: host.decl().module_path().join("::"),
            });
        }

        let save_set = extract(host, &self.config.member_marker);
        let eligible = is_extendable(host, &self.config.extendable_modifier);
        tracing::debug!(members = save_set.len(), eligible, "save set extracted");

        let mut artifacts = vec![data_struct::emit(name, &save_set, &self.options)?];
        if eligible {
            artifacts.push(save_method::emit(name, &save_set, &self.options)?);
            artifacts.push(load_method::emit(name, &save_set, &self.options)?);
        } else {
            tracing::debug!(
                modifier = %self.config.extendable_modifier,
                "host not extendable; save and load methods skipped"
            );
        }

        Ok(HostArtifacts {
            host: name.to_string(),
            eligible,
            artifacts,
        })
    }
}

fn register<S>(sink: &mut S, built: HostArtifacts) -> Result<HostOutcome, GenerateError>
where
    S: ArtifactSink + ?Sized,
{
    let artifacts = sink.register_all(built.artifacts)?;
    Ok(HostOutcome {
        host: built.host,
        eligible: built.eligible,
        artifacts,
    })
}

fn emit_marker_enum<S>(
    declarations: &DeclarationSet,
    wanted: &MarkerEnum,
    sink: &mut S,
) -> Result<String, GenerateError>
where
    S: ArtifactSink + ?Sized,
{
    let variants: Vec<&str> = declarations
        .declarations()
        .iter()
        .filter(|decl| decl.has_marker(&wanted.marker))
        .map(|decl| decl.name())
        .collect();

    let artifact = marker_enum::emit(wanted, &variants)?;
    let name = artifact.logical_name.clone();
    sink.register(artifact)?;
    tracing::debug!(enum_name = %wanted.enum_name, variants = variants.len(), "marker enum emitted");
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SinkError;
    use crate::sink::MemorySink;
    use crate::tree::{MemberDecl, TypeDecl};

    fn player() -> TypeDecl {
        TypeDecl::new("Player")
            .annotated("save_data")
            .modifier("extendable")
            .member(MemberDecl::field("i32", ["_health"]).annotated("save"))
    }

    #[test]
    fn unannotated_declarations_are_ignored() {
        let set = DeclarationSet::new(vec![TypeDecl::new("Camera")]);
        let mut sink = MemorySink::new();
        let report = Pipeline::new(GeneratorConfig::default())
            .unwrap()
            .run(&set, &mut sink);

        assert!(report.is_success());
        assert!(report.hosts.is_empty());
        assert!(sink.artifacts().is_empty());
    }

    #[test]
    fn generic_host_fails_locally() {
        let set = DeclarationSet::new(vec![
            TypeDecl::new("Slot").annotated("save_data").generic(),
            player(),
        ]);
        let mut sink = MemorySink::new();
        let report = Pipeline::new(GeneratorConfig::default())
            .unwrap()
            .run(&set, &mut sink);

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].host, "Slot");
        assert!(matches!(
            report.failures[0].error,
            GenerateError::UnsupportedGenerics { .. }
        ));
        assert!(report.host("Player").is_some());
        assert_eq!(sink.artifacts().len(), 3);
    }

    #[test]
    fn sink_failure_is_local() {
        let set = DeclarationSet::new(vec![player(), player()]);
        let mut sink = MemorySink::new();
        let report = Pipeline::new(GeneratorConfig::default())
            .unwrap()
            .run(&set, &mut sink);

        assert_eq!(report.hosts.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0].error, GenerateError::Sink(_)));
    }

    /// Delegates to a [`MemorySink`] and rejects the `fail_on`-th registration.
    struct FailingSink {
        inner: MemorySink,
        calls: usize,
        fail_on: usize,
    }

    impl FailingSink {
        fn failing_on(call: usize) -> Self {
            Self {
                inner: MemorySink::new(),
                calls: 0,
                fail_on: call,
            }
        }
    }

    impl ArtifactSink for FailingSink {
        fn register(&mut self, artifact: GeneratedArtifact) -> Result<(), SinkError> {
            self.calls += 1;
            if self.calls == self.fail_on {
                return Err(SinkError::Duplicate(artifact.logical_name));
            }
            self.inner.register(artifact)
        }

        fn withdraw(&mut self, logical_name: &str) {
            self.inner.withdraw(logical_name);
        }
    }

    #[test]
    fn failed_host_registers_nothing() {
        for fail_on in [2, 3] {
            let set = DeclarationSet::new(vec![player()]);
            let mut sink = FailingSink::failing_on(fail_on);
            let report = Pipeline::new(GeneratorConfig::default())
                .unwrap()
                .run(&set, &mut sink);

            assert_eq!(report.failures.len(), 1);
            assert!(report.hosts.is_empty());
            assert!(sink.inner.artifacts().is_empty(), "call {fail_on} left artifacts");
        }
    }

    #[test]
    fn sibling_artifacts_survive_a_failed_host() {
        let set = DeclarationSet::new(vec![
            TypeDecl::new("Door")
                .annotated("save_data")
                .modifier("extendable"),
            player(),
        ]);
        // Door takes calls 1-3; Player's load artifact is call 6.
        let mut sink = FailingSink::failing_on(6);
        let report = Pipeline::new(GeneratorConfig::default())
            .unwrap()
            .run(&set, &mut sink);

        assert_eq!(report.failures[0].host, "Player");
        assert_eq!(
            sink.inner.names(),
            ["DoorSaveData.g.rs", "Door.ToData.g.rs", "Door.FromData.g.rs"]
        );
    }

    #[test]
    fn enum_host_fails_locally() {
        let set = DeclarationSet::new(vec![
            TypeDecl::new("Mode")
                .with_kind(DeclKind::Enum)
                .annotated("save_data"),
            player(),
        ]);
        let mut sink = MemorySink::new();
        let report = Pipeline::new(GeneratorConfig::default())
            .unwrap()
            .run(&set, &mut sink);

        assert!(matches!(
            &report.failures[0].error,
            GenerateError::UnsupportedKind { host } if host == "Mode"
        ));
        assert_eq!(sink.artifacts().len(), 3);
    }

    #[test]
    fn nested_host_fails_locally() {
        let set = DeclarationSet::new(vec![
            TypeDecl::new("Chest")
                .annotated("save_data")
                .modifier("extendable")
                .in_module(vec!["world".to_string(), "props".to_string()])
                .member(MemberDecl::field("u32", ["_gold"]).annotated("save")),
            player(),
        ]);
        let mut sink = MemorySink::new();
        let report = Pipeline::new(GeneratorConfig::default())
            .unwrap()
            .run(&set, &mut sink);

        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            &report.failures[0].error,
            GenerateError::NestedHost { host, module_path }
                if host == "Chest" && module_path == "world::props"
        ));
        assert!(sink.names().iter().all(|name| !name.starts_with("Chest")));
        assert!(report.host("Player").is_some());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GeneratorConfig::new().with_declaration_marker("");
        assert!(Pipeline::new(config).is_err());
    }

    #[test]
    fn marker_enums_follow_hosts() {
        let set = DeclarationSet::new(vec![
            player(),
            TypeDecl::new("Goblin").annotated("enemy"),
            TypeDecl::new("Slime").annotated("enemy"),
        ]);
        let config =
            GeneratorConfig::default().with_marker_enum(MarkerEnum::new("enemy", "EnemyType"));
        let mut sink = MemorySink::new();
        let report = Pipeline::new(config).unwrap().run(&set, &mut sink);

        assert!(report.is_success());
        assert_eq!(report.marker_enums, ["EnemyType.g.rs"]);
        assert_eq!(sink.names().last(), Some(&"EnemyType.g.rs"));
        assert_eq!(report.artifact_count(), 4);
    }
}
