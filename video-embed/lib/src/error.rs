use thiserror::Error;

/// Errors returned while rendering through a registry.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// No service is registered under the requested name.
    #[error("unknown video service: {0}")]
    UnknownService(String),
}

/// Errors returned while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration was not valid YAML.
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The configuration was not valid JSON.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// A class name contains characters that would break the `class` attribute.
    #[error("invalid {field}: {value:?} contains characters not allowed in a class attribute")]
    InvalidClassName {
        /// The offending configuration key.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Convenience Result type for rendering operations.
pub type Result<T> = std::result::Result<T, EmbedError>;
