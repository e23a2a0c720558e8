// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory extension fragment source.

use crate::domain::{ExtensionFragments, Result};
use crate::ports::FragmentSource;

/// Fragment source holding fragments built in code.
///
/// # Examples
///
/// ```rust
/// use storecfg::adapters::MemoryFragmentSource;
/// use storecfg::domain::ExtensionFragments;
/// use serde_json::json;
///
/// let source = MemoryFragmentSource::new(
///     "defaults",
///     ExtensionFragments::new().with_project("redis_url", json!("redis://localhost:6379")),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MemoryFragmentSource {
    name: String,
    priority: u8,
    fragments: ExtensionFragments,
}

impl MemoryFragmentSource {
    /// Creates a source with the default priority of 1.
    pub fn new(name: impl Into<String>, fragments: ExtensionFragments) -> Self {
        Self {
            name: name.into(),
            priority: 1,
            fragments,
        }
    }

    /// Sets the merge priority.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }
}

impl FragmentSource for MemoryFragmentSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn fragments(&self) -> Result<ExtensionFragments> {
        Ok(self.fragments.clone())
    }
}
