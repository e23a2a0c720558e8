// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fragment parser trait definition.
//!
//! This module defines the `FragmentParser` trait, which turns the content of a
//! fragment file into [`ExtensionFragments`].
//!
//! # Document Format
//!
//! A fragment document is a mapping. Its `projectConfig` entry, if present, must be a
//! mapping and supplies the fragments placed inside `projectConfig`; every other
//! top-level entry becomes a top-level fragment:
//!
//! ```yaml
//! projectConfig:
//!   redis_url: redis://localhost:6379
//! plugins:
//!   - payment-manual
//! ```

use crate::domain::{ExtensionFragments, Result};

/// A trait for parsing fragment files.
///
/// # Examples
///
/// ```rust
/// use storecfg::domain::{ExtensionFragments, Result};
/// use storecfg::ports::FragmentParser;
///
/// struct NothingParser;
///
/// impl FragmentParser for NothingParser {
///     fn parse(&self, _content: &str) -> Result<ExtensionFragments> {
///         Ok(ExtensionFragments::new())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["none"]
///     }
/// }
/// ```
pub trait FragmentParser {
    /// Parses document content into fragments.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the content is not a valid fragment
    /// document.
    fn parse(&self, content: &str) -> Result<ExtensionFragments>;

    /// Returns the file extensions this parser handles, without the leading dot.
    fn supported_extensions(&self) -> &[&str];
}
