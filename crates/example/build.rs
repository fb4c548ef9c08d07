//! Generates save data for the entities in `src/entities.rs`.

use savegen_build::{
    BuildError, Builder, GeneratorConfig, MarkerEnum, TracingSetup, resolve_runtime_path,
};

fn main() -> Result<(), BuildError> {
    let config = GeneratorConfig::default()
        .with_runtime_path(resolve_runtime_path())
        .with_carrier_derive("Debug")
        .with_carrier_derive("Clone")
        .with_carrier_derive("PartialEq")
        .with_marker_enum(MarkerEnum::new("save_data", "SaveHost"));

    Builder::new()
        .source("src/entities.rs")
        .config(config)
        .tracing(TracingSetup::new())
        .generate()?;

    Ok(())
}
