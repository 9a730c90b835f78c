//! Error types for configuration I/O.
//!
//! Dialog rendering and event handling are infallible; only loading and
//! saving configuration can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("Failed to read config from {path}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`crate::Config`].
    #[error("Failed to parse config from {path}")]
    Parse {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration could not be serialized.
    #[error("Failed to serialize config")]
    Serialize(#[source] serde_json::Error),

    /// The configuration file or its directory could not be written.
    #[error("Failed to write config to {path}")]
    Write {
        /// File or directory that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// No per-user configuration directory could be resolved.
    #[error("Could not determine a configuration directory")]
    NoConfigDir,
}

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
