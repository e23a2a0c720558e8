// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration object handed to the hosting framework.
//!
//! A [`Configuration`] is built once from a [`RuntimeMode`] and never changes
//! afterwards. Its shape on the wire is:
//!
//! ```text
//! { "projectConfig": { "database_extra": {} | { "ssl": { "rejectUnauthorized": false } } } }
//! ```
//!
//! plus whatever extension fragments the provider was given.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::{DatabaseExtra, ExtensionFragments, Fragments, RuntimeMode};
use serde::{Deserialize, Serialize};

/// The `projectConfig` mapping.
///
/// `database_extra` is required when deserializing; a missing entry is an error,
/// not a silent development shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    database_extra: DatabaseExtra,
    #[serde(flatten)]
    extensions: Fragments,
}

impl ProjectConfig {
    /// Returns the database extra fragment.
    pub fn database_extra(&self) -> &DatabaseExtra {
        &self.database_extra
    }

    /// Returns the extension fragments stored next to `database_extra`.
    pub fn extensions(&self) -> &Fragments {
        &self.extensions
    }

    /// Looks up a single extension fragment.
    pub fn extension(&self, key: &str) -> Option<&serde_json::Value> {
        self.extensions.get(key)
    }
}

/// The complete configuration object.
///
/// # Examples
///
/// ```
/// use storecfg::domain::{Configuration, RuntimeMode};
///
/// let dev = Configuration::for_mode(&RuntimeMode::Development);
/// assert!(dev.project_config().database_extra().is_empty());
///
/// let prod = Configuration::for_mode(&RuntimeMode::from("production"));
/// assert_eq!(
///     prod.to_json().unwrap(),
///     r#"{"projectConfig":{"database_extra":{"ssl":{"rejectUnauthorized":false}}}}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(rename = "projectConfig")]
    project_config: ProjectConfig,
    #[serde(flatten)]
    extensions: Fragments,
}

impl Configuration {
    /// Builds the configuration for a runtime mode.
    ///
    /// This is a pure function of `mode` and cannot fail.
    pub fn for_mode(mode: &RuntimeMode) -> Self {
        let database_extra = DatabaseExtra::for_mode(mode);
        tracing::debug!(
            "Building configuration for mode {} (tls verification disabled: {})",
            mode,
            !database_extra.is_empty()
        );

        Self {
            project_config: ProjectConfig {
                database_extra,
                extensions: Fragments::new(),
            },
            extensions: Fragments::new(),
        }
    }

    /// Attaches extension fragments. Fragments must already be validated.
    pub(crate) fn with_extensions(mut self, fragments: &ExtensionFragments) -> Self {
        self.project_config.extensions = fragments.project.clone();
        self.extensions = fragments.top_level.clone();
        self
    }

    /// Returns the `projectConfig` mapping.
    pub fn project_config(&self) -> &ProjectConfig {
        &self.project_config
    }

    /// Shortcut for `project_config().database_extra()`.
    pub fn database_extra(&self) -> &DatabaseExtra {
        &self.project_config.database_extra
    }

    /// Returns the top-level extension fragments.
    pub fn extensions(&self) -> &Fragments {
        &self.extensions
    }

    /// Renders the configuration as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ConfigError::from_json_error)
    }

    /// Renders the configuration as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ConfigError::from_json_error)
    }

    /// Renders the configuration as a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(ConfigError::from_json_error)
    }

    /// Renders the configuration as YAML.
    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(ConfigError::from_yaml_error)
    }
}

impl Default for Configuration {
    /// Same as building for an unset mode, so the non-development branch.
    fn default() -> Self {
        Self::for_mode(&RuntimeMode::default())
    }
}
