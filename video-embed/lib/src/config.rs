//! Configuration files.
//!
//! An [`EmbedConfig`] holds the [`EnvironmentOptions`] at the top level plus a
//! `services` table of per-service option overrides:
//!
//! ```yaml
//! containerClassName: video
//! serviceClassPrefix: video--
//! outputPlayerSize: false
//! outputPlayerAspectRatio: true
//! services:
//!   youtube:
//!     width: 1280
//!     height: 720
//! ```
//!
//! Files ending in `.json` are parsed as JSON, anything else as YAML. Loading
//! validates the environment options before returning. Top-level keys that
//! are not recognised are kept in [`EmbedConfig::unknown`] and reported with a
//! warning.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::environment::EnvironmentOptions;
use crate::error::ConfigError;
use crate::options::ServiceOptions;

/// Environment options plus per-service overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    #[serde(flatten)]
    pub environment: EnvironmentOptions,
    /// Option overrides keyed by service name.
    pub services: BTreeMap<String, ServiceOptions>,
    /// Top-level keys no option matched, usually misspellings.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

impl EmbedConfig {
    /// Parses and validates a YAML document.
    ///
    /// ## Examples
    ///
    /// ```
    /// use video_embed::EmbedConfig;
    ///
    /// let config = EmbedConfig::from_yaml_str("allowFullScreen: false\nservices:\n  vimeo:\n    width: 800\n").unwrap();
    /// assert!(!config.environment.allow_full_screen);
    /// assert_eq!(config.overrides_for("vimeo").width(), Some(800.0));
    /// ```
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EmbedConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: EmbedConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file, choosing the format by extension.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::debug!(is_json, "loading embed configuration");
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// See [`EnvironmentOptions::validate`]. Unrecognised keys are logged,
    /// not rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for key in self.unknown.keys() {
            tracing::warn!(key = %key, "unrecognised configuration key; using defaults for it");
        }
        self.environment.validate()
    }

    /// Overrides configured for `service`, empty when there are none.
    pub fn overrides_for(&self, service: &str) -> ServiceOptions {
        self.services.get(service).cloned().unwrap_or_default()
    }
}
