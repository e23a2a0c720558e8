// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension fragment source trait definition.

use crate::domain::{ExtensionFragments, Result};

/// A trait for sources of extension fragments.
///
/// Fragments are read once, when the provider is built. Sources are merged in
/// ascending priority order, so a source with a higher priority overrides keys from
/// lower ones.
///
/// # Examples
///
/// ```rust
/// use storecfg::domain::{ExtensionFragments, Result};
/// use storecfg::ports::FragmentSource;
/// use serde_json::json;
///
/// struct CorsFragments;
///
/// impl FragmentSource for CorsFragments {
///     fn name(&self) -> &str {
///         "cors"
///     }
///
///     fn fragments(&self) -> Result<ExtensionFragments> {
///         Ok(ExtensionFragments::new().with_project("store_cors", json!("*")))
///     }
/// }
/// ```
pub trait FragmentSource: Send + Sync {
    /// Returns the name of this source, used for logging and errors.
    fn name(&self) -> &str;

    /// Returns the merge priority of this source. Higher values win.
    fn priority(&self) -> u8 {
        1
    }

    /// Returns the fragments this source contributes.
    fn fragments(&self) -> Result<ExtensionFragments>;
}
