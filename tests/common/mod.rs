// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and mock implementations shared by integration tests.

use serde_json::json;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use storecfg::domain::{ConfigError, ExtensionFragments, Result};
use storecfg::ports::{FragmentSource, ModeSource};

/// A mode source that counts how often it was read.
///
/// The counter is shared, so reads stay observable after the source is moved into a
/// provider.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct CountingModeSource {
    mode: Option<String>,
    reads: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl CountingModeSource {
    /// Creates a source reporting `mode`.
    pub fn new(mode: Option<&str>) -> Self {
        Self {
            mode: mode.map(str::to_string),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns the number of reads so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Returns a handle to the read counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.reads)
    }
}

impl ModeSource for CountingModeSource {
    fn name(&self) -> &str {
        "counting"
    }

    fn read_mode(&self) -> Option<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.mode.clone()
    }
}

/// A fragment source with a configurable priority and optional failure.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct MockFragmentSource {
    name: String,
    priority: u8,
    fragments: ExtensionFragments,
    should_fail: bool,
}

#[allow(dead_code)]
impl MockFragmentSource {
    /// Creates a new mock source with the given name and priority.
    pub fn new(name: impl Into<String>, priority: u8) -> Self {
        Self {
            name: name.into(),
            priority,
            fragments: ExtensionFragments::new(),
            should_fail: false,
        }
    }

    /// Adds a project fragment.
    pub fn with_project(mut self, key: &str, value: serde_json::Value) -> Self {
        self.fragments.project.insert(key.to_string(), value);
        self
    }

    /// Adds a top-level fragment.
    pub fn with_top_level(mut self, key: &str, value: serde_json::Value) -> Self {
        self.fragments.top_level.insert(key.to_string(), value);
        self
    }

    /// Sets whether reading fragments should fail.
    pub fn with_failure(mut self, should_fail: bool) -> Self {
        self.should_fail = should_fail;
        self
    }
}

impl FragmentSource for MockFragmentSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn fragments(&self) -> Result<ExtensionFragments> {
        if self.should_fail {
            Err(ConfigError::SourceError {
                source_name: self.name.clone(),
                message: "Mock fragment failure".to_string(),
                source: None,
            })
        } else {
            Ok(self.fragments.clone())
        }
    }
}

/// Creates mock fragment sources with different priorities for precedence testing.
#[allow(dead_code)]
pub fn create_precedence_sources() -> (MockFragmentSource, MockFragmentSource, MockFragmentSource)
{
    let low = MockFragmentSource::new("low_priority", 1)
        .with_project("redis_url", json!("redis://low"))
        .with_project("store_cors", json!("*"));

    let medium = MockFragmentSource::new("medium_priority", 2)
        .with_project("redis_url", json!("redis://medium"))
        .with_top_level("plugins", json!(["medium"]));

    let high = MockFragmentSource::new("high_priority", 3)
        .with_project("redis_url", json!("redis://high"));

    (low, medium, high)
}

/// Sets environment variables and removes them when dropped.
#[allow(dead_code)]
pub struct EnvGuard {
    keys: Vec<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Creates an empty guard.
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    /// Sets a variable, remembering it for cleanup.
    pub fn set(&mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }

    /// Removes a variable immediately.
    pub fn unset(&mut self, key: &str) {
        env::remove_var(key);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}

/// Creates a temporary YAML file with the given content.
#[allow(dead_code)]
pub fn create_temp_yaml(content: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}
