//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A setting is present but has an invalid value.
    #[error("Invalid value for '{field}': {message}")]
    ValidationError {
        field: &'static str,
        message: String,
    },

    /// A required setting was supplied neither on the command line nor in the config file.
    #[error("Missing required setting '{field}' (pass --{field} or set it in the config file)")]
    MissingSetting { field: &'static str },
}
