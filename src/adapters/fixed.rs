// SPDX-License-Identifier: MIT OR Apache-2.0

//! Explicit runtime mode adapter.

use crate::ports::ModeSource;

/// Runtime mode source holding a value supplied by the hosting application.
///
/// Use this when the application already knows its mode and should not depend on
/// ambient process state, or in tests.
///
/// # Examples
///
/// ```rust
/// use storecfg::adapters::FixedModeAdapter;
/// use storecfg::ports::ModeSource;
///
/// assert!(FixedModeAdapter::new("development").runtime_mode().is_development());
/// assert!(!FixedModeAdapter::unset().runtime_mode().is_development());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedModeAdapter {
    mode: Option<String>,
}

impl FixedModeAdapter {
    /// Creates a source that always reports `mode`.
    pub fn new(mode: impl Into<String>) -> Self {
        Self {
            mode: Some(mode.into()),
        }
    }

    /// Creates a source that reports no mode at all.
    pub fn unset() -> Self {
        Self { mode: None }
    }
}

impl ModeSource for FixedModeAdapter {
    fn name(&self) -> &str {
        "fixed"
    }

    fn read_mode(&self) -> Option<String> {
        self.mode.clone()
    }
}
