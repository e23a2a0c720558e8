// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime mode source trait definition.
//!
//! This module defines the `ModeSource` trait, the port through which the provider
//! learns the current runtime mode. Reading the process environment is one
//! implementation; passing the mode explicitly is another.

use crate::domain::RuntimeMode;

/// A trait for runtime mode sources.
///
/// Reading a mode never fails. A source that cannot produce a value returns `None`,
/// which resolves to a non-development mode.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a provider can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use storecfg::ports::ModeSource;
///
/// struct StagingSource;
///
/// impl ModeSource for StagingSource {
///     fn name(&self) -> &str {
///         "staging"
///     }
///
///     fn read_mode(&self) -> Option<String> {
///         Some("staging".to_string())
///     }
/// }
///
/// assert!(!StagingSource.runtime_mode().is_development());
/// ```
pub trait ModeSource: Send + Sync {
    /// Returns the name of this source, used for logging.
    fn name(&self) -> &str;

    /// Reads the raw mode value, or `None` when it is not set.
    fn read_mode(&self) -> Option<String>;

    /// Reads and resolves the runtime mode.
    fn runtime_mode(&self) -> RuntimeMode {
        let raw = self.read_mode();
        tracing::debug!("Mode source '{}' returned {:?}", self.name(), raw);
        RuntimeMode::from_raw(raw.as_deref())
    }
}
