// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable runtime mode adapter.
//!
//! This module provides an adapter that reads the runtime mode from a process
//! environment variable, `NODE_ENV` by default.

use crate::ports::ModeSource;
use std::env;

/// The variable read when no other name is given.
pub const DEFAULT_MODE_VARIABLE: &str = "NODE_ENV";

/// Runtime mode source backed by a process environment variable.
///
/// The variable is read on every call, so a provider observes the value at the time
/// it builds a configuration. A value that is not valid Unicode is reported lossily
/// and therefore never equals `"development"`.
///
/// # Examples
///
/// ```rust
/// use storecfg::adapters::EnvModeAdapter;
/// use storecfg::ports::ModeSource;
///
/// // Read NODE_ENV
/// let adapter = EnvModeAdapter::new();
/// assert_eq!(adapter.variable(), "NODE_ENV");
///
/// // Read a different variable
/// let adapter = EnvModeAdapter::with_variable("APP_ENV");
/// assert_eq!(adapter.variable(), "APP_ENV");
/// ```
#[derive(Debug, Clone)]
pub struct EnvModeAdapter {
    /// Name of the environment variable holding the mode
    variable: String,
}

impl EnvModeAdapter {
    /// Creates an adapter reading `NODE_ENV`.
    pub fn new() -> Self {
        Self::with_variable(DEFAULT_MODE_VARIABLE)
    }

    /// Creates an adapter reading the given variable.
    ///
    /// # Arguments
    ///
    /// * `variable` - The environment variable name (e.g., "APP_ENV")
    pub fn with_variable(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }

    /// Returns the name of the variable this adapter reads.
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl Default for EnvModeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeSource for EnvModeAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn read_mode(&self) -> Option<String> {
        let value = env::var_os(&self.variable)?;
        match value.into_string() {
            Ok(value) => Some(value),
            Err(raw) => {
                tracing::debug!(
                    "Environment variable {} is not valid unicode, treating as non-development",
                    self.variable
                );
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }
}
