//! # Core Error Types
//!
//! Errors raised while coercing attribute values or loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// A raw attribute value that could not be coerced into the requested type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    /// Boolean attributes accept `0`, `1`, `true` or `false`.
    #[error("expected a boolean (\"0\" or \"1\"), got \"{value}\"")]
    InvalidBool {
        /// The rejected raw value.
        value: String,
    },

    /// Numeric attributes must parse as a finite number.
    #[error("expected a number, got \"{value}\"")]
    InvalidNumber {
        /// The rejected raw value.
        value: String,
    },
}

/// Result type for coercion.
pub type CoerceResult<T> = Result<T, CoerceError>;

/// Errors that can occur while loading a [`RuntimeConfig`](crate::RuntimeConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for this schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
