// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime mode type.
//!
//! The runtime mode is the one input that decides the shape of the database
//! configuration. Only the exact string `"development"` selects development mode;
//! every other value, including an absent one, is treated as non-development.

use std::fmt;

/// The literal value that selects development mode.
pub const DEVELOPMENT: &str = "development";

/// The process-wide runtime mode of the hosting application.
///
/// The raw value is kept for logging and display only. No validation is performed
/// beyond the equality check against [`DEVELOPMENT`].
///
/// # Examples
///
/// ```
/// use storecfg::domain::RuntimeMode;
///
/// assert!(RuntimeMode::from_raw(Some("development")).is_development());
/// assert!(!RuntimeMode::from_raw(Some("Development")).is_development());
/// assert!(!RuntimeMode::from_raw(None).is_development());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RuntimeMode {
    /// The mode was exactly `"development"`.
    Development,
    /// Any other mode, staging, production and test included.
    NonDevelopment {
        /// The value that was read, or `None` when the mode was not set
        raw: Option<String>,
    },
}

impl RuntimeMode {
    /// Resolves a runtime mode from an optional raw value.
    ///
    /// The comparison is exact and case-sensitive.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(DEVELOPMENT) => RuntimeMode::Development,
            other => RuntimeMode::NonDevelopment {
                raw: other.map(str::to_string),
            },
        }
    }

    /// A non-development mode with no value, as when the variable is unset.
    pub fn unset() -> Self {
        RuntimeMode::NonDevelopment { raw: None }
    }

    /// Returns `true` only for development mode.
    pub fn is_development(&self) -> bool {
        matches!(self, RuntimeMode::Development)
    }

    /// Returns the raw value the mode was resolved from, if any.
    pub fn raw(&self) -> Option<&str> {
        match self {
            RuntimeMode::Development => Some(DEVELOPMENT),
            RuntimeMode::NonDevelopment { raw } => raw.as_deref(),
        }
    }
}

impl Default for RuntimeMode {
    fn default() -> Self {
        Self::unset()
    }
}

impl From<&str> for RuntimeMode {
    fn from(s: &str) -> Self {
        RuntimeMode::from_raw(Some(s))
    }
}

impl From<String> for RuntimeMode {
    fn from(s: String) -> Self {
        RuntimeMode::from_raw(Some(&s))
    }
}

impl From<Option<String>> for RuntimeMode {
    fn from(s: Option<String>) -> Self {
        RuntimeMode::from_raw(s.as_deref())
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.raw() {
            Some(raw) => write!(f, "{}", raw),
            None => write!(f, "<unset>"),
        }
    }
}
