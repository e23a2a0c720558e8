// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types for the configuration crate. It is
//! independent of where the runtime mode or extension fragments come from.

pub mod configuration;
pub mod database_extra;
pub mod errors;
pub mod fragments;
pub mod runtime_mode;
pub mod service;

// Re-export commonly used types
pub use configuration::{Configuration, ProjectConfig};
pub use database_extra::{DatabaseExtra, SslOptions};
pub use errors::{ConfigError, Result};
pub use fragments::{ExtensionFragments, Fragments};
pub use runtime_mode::RuntimeMode;
pub use service::ConfigurationProvider;
