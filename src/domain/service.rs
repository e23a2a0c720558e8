// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration provider trait definition.
//!
//! This module defines the `ConfigurationProvider` trait, the main interface through
//! which the hosting application obtains its configuration object.

use crate::domain::Configuration;

/// The main configuration provider trait.
///
/// A provider produces a fresh [`Configuration`] from the runtime mode it observes at
/// call time. Producing a configuration never fails; calling `load_config` twice
/// while the mode is unchanged yields structurally equal results.
///
/// # Examples
///
/// ```rust
/// use storecfg::domain::{Configuration, ConfigurationProvider, RuntimeMode};
///
/// struct AlwaysDevelopment;
///
/// impl ConfigurationProvider for AlwaysDevelopment {
///     fn load_config(&self) -> Configuration {
///         Configuration::for_mode(&RuntimeMode::Development)
///     }
/// }
///
/// let provider = AlwaysDevelopment;
/// assert!(provider.load_config().database_extra().is_empty());
/// ```
pub trait ConfigurationProvider: Send + Sync {
    /// Builds the configuration for the current runtime mode.
    fn load_config(&self) -> Configuration;
}
