//! Error types for format adapters and the conversion pipeline.

use thiserror::Error;

use hueport_core::{MapError, ValidationError};

/// Errors that can occur while reading, converting or writing a scheme.
#[derive(Debug, Error)]
pub enum FormatError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML serialization failure.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Property list serialization failure.
    #[error("plist error: {0}")]
    Plist(#[from] plist::Error),

    /// Input text could not be parsed as the named format.
    #[error("failed to parse {format} input: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// No adapter is registered under the requested name.
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// The mapping engine rejected a root value.
    #[error("mapping failed: {0}")]
    Mapping(#[from] MapError),

    /// A registered adapter schema failed static validation.
    #[error("invalid {format} schema: {errors:?}")]
    InvalidSchema {
        format: &'static str,
        errors: Vec<ValidationError>,
    },

    /// Configuration value is out of range or inconsistent.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results with [`FormatError`].
pub type Result<T> = std::result::Result<T, FormatError>;
