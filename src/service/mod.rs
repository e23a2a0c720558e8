// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration provider implementations.

pub mod default_service;
pub mod global;

// Re-export commonly used types
pub use default_service::{ConfigProviderBuilder, DefaultConfigProvider};
pub use global::{global, init_global};
