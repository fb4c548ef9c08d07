//! Generator configuration.
//!
//! # Example
//!
//! ```
//! use savegen_codegen::config::{GeneratorConfig, MarkerEnum};
//!
//! let config = GeneratorConfig::default()
//!     .with_runtime_path("::savegen::runtime")
//!     .with_carrier_derive("Debug")
//!     .with_marker_enum(MarkerEnum::new("enemy", "EnemyType"));
//! assert!(config.validate().is_ok());
//! ```

use crate::error::ConfigError;
use crate::matcher::Marker;

/// Default declaration marker.
pub const DEFAULT_DECLARATION_MARKER: &str = "save_data";
/// Default member marker.
pub const DEFAULT_MEMBER_MARKER: &str = "save";
/// Default modifier that makes a host extendable.
pub const DEFAULT_EXTENDABLE_MODIFIER: &str = "extendable";
/// Default suffix appended to the host name to name its carrier.
pub const DEFAULT_CARRIER_SUFFIX: &str = "SaveData";
/// Default path of the runtime crate in emitted code.
pub const DEFAULT_RUNTIME_PATH: &str = "::savegen_runtime";

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Marker selecting host declarations.
    pub declaration_marker: Marker,
    /// Marker selecting saved members.
    pub member_marker: Marker,
    /// Modifier gating method injection.
    pub extendable_modifier: String,
    /// Carrier name suffix.
    pub carrier_suffix: String,
    /// Path of the runtime crate as seen from emitted code.
    pub runtime_path: String,
    /// Extra derives placed on every carrier, e.g. `Debug`.
    pub carrier_derives: Vec<String>,
    /// Marker enums to emit.
    pub marker_enums: Vec<MarkerEnum>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            declaration_marker: Marker::from(DEFAULT_DECLARATION_MARKER),
            member_marker: Marker::from(DEFAULT_MEMBER_MARKER),
            extendable_modifier: DEFAULT_EXTENDABLE_MODIFIER.to_string(),
            carrier_suffix: DEFAULT_CARRIER_SUFFIX.to_string(),
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            carrier_derives: Vec::new(),
            marker_enums: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the declaration marker.
    #[must_use]
    pub fn with_declaration_marker(mut self, marker: impl Into<String>) -> Self {
        self.declaration_marker = Marker::new(marker);
        self
    }

    /// Sets the member marker.
    #[must_use]
    pub fn with_member_marker(mut self, marker: impl Into<String>) -> Self {
        self.member_marker = Marker::new(marker);
        self
    }

    /// Sets the modifier that makes a host extendable.
    #[must_use]
    pub fn with_extendable_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.extendable_modifier = modifier.into();
        self
    }

    /// Sets the carrier name suffix.
    #[must_use]
    pub fn with_carrier_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.carrier_suffix = suffix.into();
        self
    }

    /// Sets the runtime crate path used by emitted code.
    #[must_use]
    pub fn with_runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    /// Adds an extra derive to every carrier.
    #[must_use]
    pub fn with_carrier_derive(mut self, derive: impl Into<String>) -> Self {
        self.carrier_derives.push(derive.into());
        self
    }

    /// Adds a marker enum.
    #[must_use]
    pub fn with_marker_enum(mut self, marker_enum: MarkerEnum) -> Self {
        self.marker_enums.push(marker_enum);
        self
    }

    /// Checks the configuration.
    ///
    /// Markers must be non-empty and the declaration marker must differ from
    /// the member marker.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.declaration_marker.as_str().is_empty() {
            return Err(ConfigError::Empty("declaration marker"));
        }
        if self.member_marker.as_str().is_empty() {
            return Err(ConfigError::Empty("member marker"));
        }
        if self.extendable_modifier.is_empty() {
            return Err(ConfigError::Empty("extendable modifier"));
        }
        if self.declaration_marker == self.member_marker {
            return Err(ConfigError::AliasedMarkers(
                self.declaration_marker.to_string(),
            ));
        }
        if syn::parse_str::<syn::Path>(&self.runtime_path).is_err() {
            return Err(ConfigError::RuntimePath(self.runtime_path.clone()));
        }
        if let Some(derive) = self
            .carrier_derives
            .iter()
            .find(|derive| syn::parse_str::<syn::Path>(derive).is_err())
        {
            return Err(ConfigError::Derive(derive.clone()));
        }
        for marker_enum in &self.marker_enums {
            marker_enum.validate()?;
        }
        Ok(())
    }
}

/// An enum listing every type declaration that carries `marker`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerEnum {
    /// Marker selecting the listed declarations.
    pub marker: Marker,
    /// Name of the emitted enum.
    pub enum_name: String,
    /// Leading default variant.
    pub placeholder: String,
}

impl MarkerEnum {
    /// Creates a marker enum with the `Unselected` placeholder.
    pub fn new(marker: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self {
            marker: Marker::new(marker),
            enum_name: enum_name.into(),
            placeholder: "Unselected".to_string(),
        }
    }

    /// Sets the placeholder variant.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.marker.as_str().is_empty() {
            return Err(ConfigError::Empty("marker enum marker"));
        }
        for name in [&self.enum_name, &self.placeholder] {
            if syn::parse_str::<syn::Ident>(name).is_err() {
                return Err(ConfigError::MarkerEnum(name.clone()));
            }
        }
        Ok(())
    }
}
