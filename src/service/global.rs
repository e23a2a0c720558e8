// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide configuration instance.
//!
//! The hosting framework reads its configuration once at startup. These functions
//! give it a single shared, read-only instance for the lifetime of the process.

use crate::domain::{ConfigError, Configuration, ConfigurationProvider, Result};
use crate::service::default_service::{default_mode_source, DefaultConfigProvider};
use once_cell::sync::OnceCell;

static GLOBAL: OnceCell<Configuration> = OnceCell::new();

/// Returns the process-wide configuration, building it on first use.
///
/// The first call resolves the runtime mode (from `NODE_ENV` with the `env`
/// feature, otherwise as unset). Every later call returns that same instance,
/// whatever the environment holds by then.
pub fn global() -> &'static Configuration {
    GLOBAL.get_or_init(|| {
        tracing::debug!("Initializing global configuration");
        DefaultConfigProvider::new(default_mode_source()).load_config()
    })
}

/// Installs an explicit process-wide configuration.
///
/// # Errors
///
/// Returns `ConfigError::AlreadyInitialized` if [`global`] or `init_global` already
/// ran.
pub fn init_global(config: Configuration) -> Result<&'static Configuration> {
    GLOBAL
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(global())
}
