use thiserror::Error;

/// Error returned when search configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid YAML or has unknown fields.
    #[error("invalid search config: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid value for '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}
