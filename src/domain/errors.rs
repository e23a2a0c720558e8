// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Building a [`Configuration`](crate::domain::Configuration) for a runtime mode never
//! fails. The errors defined here only arise around it: loading extension fragments,
//! rendering the configuration for the hosting framework, and installing the
//! process-wide instance.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use storecfg::domain::errors::ConfigError;
///
/// fn check_fragment_key(key: &str) -> Result<(), ConfigError> {
///     if key == "database_extra" {
///         return Err(ConfigError::ReservedKey {
///             key: key.to_string(),
///             source_name: "memory".to_string(),
///         });
///     }
///     Ok(())
/// }
///
/// assert!(check_fragment_key("database_extra").is_err());
/// assert!(check_fragment_key("redis_url").is_ok());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A fragment source tried to define a key the provider owns.
    #[error("Fragment source '{source_name}' defines reserved key: {key}")]
    ReservedKey {
        /// The reserved key
        key: String,
        /// The name of the fragment source that defined it
        source_name: String,
    },

    /// An error occurred in a fragment source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse fragment content.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to render a configuration into an output format.
    #[error("Failed to serialize configuration as {format}: {source}")]
    SerializationError {
        /// The output format, e.g. "json"
        format: String,
        /// The underlying serializer error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The process-wide configuration was already installed.
    #[error("Global configuration is already initialized")]
    AlreadyInitialized,
}

impl ConfigError {
    /// Creates a SerializationError from a `serde_json` error.
    pub fn from_json_error(err: serde_json::Error) -> Self {
        ConfigError::SerializationError {
            format: "json".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a SerializationError from a `serde_yaml` error.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_error(err: serde_yaml::Error) -> Self {
        ConfigError::SerializationError {
            format: "yaml".to_string(),
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
