//! Error types for configuration loading.

use thiserror::Error;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid JSON in a configuration file.
    #[error("Invalid JSON in {file}: {error}")]
    InvalidJson {
        /// The file path.
        file: String,
        /// The error message.
        error: String,
    },

    /// A value failed validation.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
