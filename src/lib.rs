// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime-mode aware project configuration for commerce platform databases.
//!
//! This crate builds the configuration object a commerce platform's bootstrap reads
//! at startup. Its one defined setting, `projectConfig.database_extra`, depends on
//! the runtime mode:
//!
//! - `"development"` (exact match): `database_extra` is empty.
//! - Anything else, including an unset mode: `database_extra` is
//!   `{ ssl: { rejectUnauthorized: false } }`, so the database connection uses TLS
//!   without verifying the server certificate.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`RuntimeMode`, `Configuration`, `DatabaseExtra`, errors)
//! - **Ports**: Trait definitions for inputs (`ModeSource`, `FragmentSource`, `FragmentParser`)
//! - **Adapters**: Environment variable, explicit mode, in-memory and YAML file sources
//! - **Service**: The default provider and the process-wide instance
//!
//! # Feature Flags
//!
//! - `env`: Read the runtime mode from the process environment (default)
//! - `yaml`: Load extension fragments from YAML files and render YAML (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use storecfg::prelude::*;
//!
//! // Pure form: the caller supplies the mode
//! let config = load_config(&RuntimeMode::from("production"));
//! assert_eq!(
//!     config.to_json().unwrap(),
//!     r#"{"projectConfig":{"database_extra":{"ssl":{"rejectUnauthorized":false}}}}"#
//! );
//!
//! let config = load_config(&RuntimeMode::Development);
//! assert_eq!(config.to_json().unwrap(), r#"{"projectConfig":{"database_extra":{}}}"#);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

use domain::{Configuration, RuntimeMode};

/// Builds the configuration for an explicit runtime mode.
///
/// This never fails, and equal modes give equal configurations.
pub fn load_config(mode: &RuntimeMode) -> Configuration {
    Configuration::for_mode(mode)
}

/// Builds the configuration for the mode currently held in `NODE_ENV`.
///
/// An unset variable selects the non-development branch.
#[cfg(feature = "env")]
pub fn load_config_from_env() -> Configuration {
    use ports::ModeSource;
    load_config(&adapters::EnvModeAdapter::new().runtime_mode())
}

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, Configuration, ConfigurationProvider, DatabaseExtra, ExtensionFragments,
        Fragments, ProjectConfig, Result, RuntimeMode, SslOptions,
    };
    pub use crate::load_config;
    #[cfg(feature = "env")]
    pub use crate::load_config_from_env;
    pub use crate::ports::{FragmentParser, FragmentSource, ModeSource};
    pub use crate::service::{global, init_global, ConfigProviderBuilder, DefaultConfigProvider};

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvModeAdapter;
    pub use crate::adapters::{FixedModeAdapter, MemoryFragmentSource};
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFragmentAdapter, YamlFragmentParser};
}
