// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default configuration provider implementation.
//!
//! This module provides the default implementation of the `ConfigurationProvider`
//! trait, which combines a runtime mode source with any number of extension
//! fragment sources.

use crate::adapters::FixedModeAdapter;
use crate::domain::{Configuration, ConfigurationProvider, ExtensionFragments, Result};
use crate::ports::{FragmentSource, ModeSource};

/// Default implementation of the configuration provider.
///
/// Fragments are collected and validated once, when the provider is built. After
/// that, `load_config` only reads the runtime mode and cannot fail.
///
/// # Examples
///
/// ```rust
/// use storecfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let provider = DefaultConfigProvider::builder()
///     .with_mode("production")
///     .build()?;
///
/// let config = provider.load_config();
/// assert!(!config.database_extra().is_empty());
/// # Ok(())
/// # }
/// ```
pub struct DefaultConfigProvider {
    /// Where the runtime mode comes from
    mode_source: Box<dyn ModeSource>,
    /// Merged and validated extension fragments
    fragments: ExtensionFragments,
}

impl DefaultConfigProvider {
    /// Creates a provider with the given mode source and no fragments.
    pub fn new(mode_source: Box<dyn ModeSource>) -> Self {
        Self {
            mode_source,
            fragments: ExtensionFragments::new(),
        }
    }

    /// Creates a new provider builder.
    pub fn builder() -> ConfigProviderBuilder {
        ConfigProviderBuilder::new()
    }

    /// Creates a provider reading `NODE_ENV`, with no fragments.
    #[cfg(feature = "env")]
    pub fn from_env() -> Self {
        use crate::adapters::EnvModeAdapter;
        Self::new(Box::new(EnvModeAdapter::new()))
    }

    /// Returns the name of the mode source in use.
    pub fn mode_source_name(&self) -> &str {
        self.mode_source.name()
    }

    /// Returns the merged extension fragments.
    pub fn fragments(&self) -> &ExtensionFragments {
        &self.fragments
    }
}

impl ConfigurationProvider for DefaultConfigProvider {
    fn load_config(&self) -> Configuration {
        let mode = self.mode_source.runtime_mode();
        Configuration::for_mode(&mode).with_extensions(&self.fragments)
    }
}

/// Builder for constructing a `DefaultConfigProvider`.
///
/// # Examples
///
/// ```rust
/// use storecfg::adapters::MemoryFragmentSource;
/// use storecfg::domain::{ConfigurationProvider, ExtensionFragments};
/// use storecfg::service::ConfigProviderBuilder;
/// use serde_json::json;
///
/// # fn main() -> storecfg::domain::Result<()> {
/// let provider = ConfigProviderBuilder::new()
///     .with_mode("development")
///     .with_fragment_source(Box::new(MemoryFragmentSource::new(
///         "defaults",
///         ExtensionFragments::new().with_project("store_cors", json!("*")),
///     )))
///     .build()?;
///
/// let config = provider.load_config();
/// assert_eq!(config.project_config().extension("store_cors"), Some(&json!("*")));
/// # Ok(())
/// # }
/// ```
pub struct ConfigProviderBuilder {
    mode_source: Option<Box<dyn ModeSource>>,
    fragment_sources: Vec<Box<dyn FragmentSource>>,
}

impl ConfigProviderBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            mode_source: None,
            fragment_sources: Vec::new(),
        }
    }

    /// Sets the runtime mode source, replacing any previous one.
    pub fn with_mode_source(mut self, source: Box<dyn ModeSource>) -> Self {
        self.mode_source = Some(source);
        self
    }

    /// Uses an explicit runtime mode.
    pub fn with_mode(self, mode: impl Into<String>) -> Self {
        self.with_mode_source(Box::new(FixedModeAdapter::new(mode)))
    }

    /// Reads the runtime mode from `NODE_ENV`.
    #[cfg(feature = "env")]
    pub fn with_env(self) -> Self {
        use crate::adapters::EnvModeAdapter;
        self.with_mode_source(Box::new(EnvModeAdapter::new()))
    }

    /// Reads the runtime mode from the given environment variable.
    #[cfg(feature = "env")]
    pub fn with_env_variable(self, variable: impl Into<String>) -> Self {
        use crate::adapters::EnvModeAdapter;
        self.with_mode_source(Box::new(EnvModeAdapter::with_variable(variable)))
    }

    /// Adds an extension fragment source.
    pub fn with_fragment_source(mut self, source: Box<dyn FragmentSource>) -> Self {
        self.fragment_sources.push(source);
        self
    }

    /// Adds a YAML fragment file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    #[cfg(feature = "yaml")]
    pub fn with_yaml_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        use crate::adapters::YamlFragmentAdapter;
        let adapter = YamlFragmentAdapter::from_file(path)?;
        Ok(self.with_fragment_source(Box::new(adapter)))
    }

    /// Builds the provider.
    ///
    /// Without a mode source, the provider reads `NODE_ENV` when the `env` feature is
    /// enabled and otherwise behaves as if the mode were unset.
    ///
    /// # Errors
    ///
    /// Returns the first error from a fragment source, or `ConfigError::ReservedKey`
    /// when a source defines `projectConfig.database_extra` or a top-level
    /// `projectConfig`.
    pub fn build(mut self) -> Result<DefaultConfigProvider> {
        let mode_source = self.mode_source.take().unwrap_or_else(default_mode_source);

        // Lowest priority first so later merges override.
        self.fragment_sources.sort_by_key(|s| s.priority());

        let mut fragments = ExtensionFragments::new();
        for source in &self.fragment_sources {
            let contributed = source.fragments()?;
            contributed.validate(source.name())?;
            tracing::debug!(
                "Merging {} project and {} top-level fragments from '{}'",
                contributed.project.len(),
                contributed.top_level.len(),
                source.name()
            );
            fragments.merge(contributed);
        }

        Ok(DefaultConfigProvider {
            mode_source,
            fragments,
        })
    }
}

impl Default for ConfigProviderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "env")]
pub(crate) fn default_mode_source() -> Box<dyn ModeSource> {
    Box::new(crate::adapters::EnvModeAdapter::new())
}

#[cfg(not(feature = "env"))]
pub(crate) fn default_mode_source() -> Box<dyn ModeSource> {
    Box::new(FixedModeAdapter::unset())
}
