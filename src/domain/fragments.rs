// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension fragments.
//!
//! The configuration defines a single field of its own. Everything else the hosting
//! framework may need is supplied as named fragments, either inside `projectConfig`
//! or at the top level of the configuration object.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire name of the project configuration mapping.
pub const PROJECT_CONFIG_KEY: &str = "projectConfig";

/// Wire name of the database extra fragment inside `projectConfig`.
pub const DATABASE_EXTRA_KEY: &str = "database_extra";

/// Named configuration fragments, ordered by key.
pub type Fragments = BTreeMap<String, serde_json::Value>;

/// Fragments contributed by a fragment source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtensionFragments {
    /// Fragments placed inside `projectConfig`.
    #[serde(default)]
    pub project: Fragments,
    /// Fragments placed next to `projectConfig`.
    #[serde(default)]
    pub top_level: Fragments,
}

impl ExtensionFragments {
    /// Creates an empty set of fragments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fragment inside `projectConfig`.
    pub fn with_project(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.project.insert(key.into(), value);
        self
    }

    /// Adds a top-level fragment.
    pub fn with_top_level(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.top_level.insert(key.into(), value);
        self
    }

    /// Returns `true` when there are no fragments at all.
    pub fn is_empty(&self) -> bool {
        self.project.is_empty() && self.top_level.is_empty()
    }

    /// Rejects fragments that would shadow keys owned by the configuration itself.
    pub fn validate(&self, source_name: &str) -> Result<()> {
        let reserved = self
            .project
            .keys()
            .find(|k| k.as_str() == DATABASE_EXTRA_KEY)
            .or_else(|| {
                self.top_level
                    .keys()
                    .find(|k| k.as_str() == PROJECT_CONFIG_KEY)
            });

        match reserved {
            Some(key) => Err(ConfigError::ReservedKey {
                key: key.clone(),
                source_name: source_name.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Merges `other` into `self`. Keys from `other` win.
    pub fn merge(&mut self, other: ExtensionFragments) {
        for (key, value) in other.project {
            if self.project.insert(key.clone(), value).is_some() {
                tracing::debug!("Overriding project fragment '{}'", key);
            }
        }
        for (key, value) in other.top_level {
            if self.top_level.insert(key.clone(), value).is_some() {
                tracing::debug!("Overriding top-level fragment '{}'", key);
            }
        }
    }
}
