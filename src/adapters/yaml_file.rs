// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file extension fragment adapter.
//!
//! This module provides an adapter that reads extension fragments from YAML files.

use crate::domain::fragments::PROJECT_CONFIG_KEY;
use crate::domain::{ConfigError, ExtensionFragments, Fragments, Result};
use crate::ports::{FragmentParser, FragmentSource};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML fragment files (10MB)
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// YAML fragment parser.
///
/// # Examples
///
/// ```rust
/// use storecfg::adapters::YamlFragmentParser;
/// use storecfg::ports::FragmentParser;
/// use serde_json::json;
///
/// let parser = YamlFragmentParser::new();
/// let content = "projectConfig:\n  redis_url: redis://localhost\nplugins: []";
/// let fragments = parser.parse(content).unwrap();
/// assert_eq!(fragments.project.get("redis_url"), Some(&json!("redis://localhost")));
/// assert_eq!(fragments.top_level.get("plugins"), Some(&json!([])));
/// ```
#[derive(Debug, Clone)]
pub struct YamlFragmentParser;

impl YamlFragmentParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlFragmentParser
    }

    /// Rejects `.nan` and `.inf`, which have no JSON representation.
    fn check_finite(value: &serde_yaml::Value) -> Result<()> {
        match value {
            serde_yaml::Value::Number(n) => match n.as_f64() {
                Some(f) if !f.is_finite() => Err(ConfigError::ParseError {
                    message: format!("Non-finite number in YAML fragment: {}", n),
                    source: None,
                }),
                _ => Ok(()),
            },
            serde_yaml::Value::Sequence(seq) => seq.iter().try_for_each(Self::check_finite),
            serde_yaml::Value::Mapping(map) => map.values().try_for_each(Self::check_finite),
            serde_yaml::Value::Tagged(tagged) => Self::check_finite(&tagged.value),
            _ => Ok(()),
        }
    }

    /// Converts a YAML mapping into fragments.
    fn to_fragments(mapping: serde_yaml::Mapping) -> Result<Fragments> {
        let value = serde_yaml::Value::Mapping(mapping);
        Self::check_finite(&value)?;
        serde_yaml::from_value(value).map_err(|e| {
            ConfigError::ParseError {
                message: format!("Unsupported YAML fragment: {}", e),
                source: Some(Box::new(e)),
            }
        })
    }
}

impl Default for YamlFragmentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentParser for YamlFragmentParser {
    fn parse(&self, content: &str) -> Result<ExtensionFragments> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        let mut document = match value {
            serde_yaml::Value::Null => return Ok(ExtensionFragments::new()),
            serde_yaml::Value::Mapping(map) => map,
            _ => {
                return Err(ConfigError::ParseError {
                    message: "Fragment document must be a mapping".to_string(),
                    source: None,
                })
            }
        };

        let project = match document.remove(PROJECT_CONFIG_KEY) {
            None | Some(serde_yaml::Value::Null) => Fragments::new(),
            Some(serde_yaml::Value::Mapping(map)) => Self::to_fragments(map)?,
            Some(_) => {
                return Err(ConfigError::ParseError {
                    message: format!("'{}' must be a mapping", PROJECT_CONFIG_KEY),
                    source: None,
                })
            }
        };

        Ok(ExtensionFragments {
            project,
            top_level: Self::to_fragments(document)?,
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Extension fragment source backed by a YAML file.
///
/// The file is read and parsed when the adapter is created.
///
/// # Examples
///
/// ```rust,no_run
/// use storecfg::adapters::YamlFragmentAdapter;
///
/// // Load from a specific file
/// let adapter = YamlFragmentAdapter::from_file("/etc/storefront/config.yaml").unwrap();
///
/// // Load from default OS location
/// let adapter = YamlFragmentAdapter::from_default_location("storefront", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFragmentAdapter {
    /// Path to the YAML file
    file_path: PathBuf,
    /// Parsed fragments
    fragments: ExtensionFragments,
}

impl YamlFragmentAdapter {
    /// Creates a new adapter from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SourceError` if the file cannot be read or is larger than
    /// 10MB, and `ConfigError::ParseError` if its content is not a fragment document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let file_name = || {
            file_path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unknown>")
                .to_string()
        };

        let canonical_path = file_path.canonicalize().map_err(|e| ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: format!("Invalid or inaccessible path: {}", file_name()),
            source: Some(Box::new(e)),
        })?;

        let metadata = fs::metadata(&canonical_path).map_err(|e| ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: format!("Failed to read file metadata: {}", file_name()),
            source: Some(Box::new(e)),
        })?;

        if metadata.len() > MAX_YAML_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_YAML_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = fs::read_to_string(&canonical_path).map_err(|e| ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: format!("Failed to read configuration file: {}", file_name()),
            source: Some(Box::new(e)),
        })?;

        let fragments = YamlFragmentParser::new().parse(&content)?;

        tracing::debug!(
            "Loaded {} project and {} top-level fragments from {}",
            fragments.project.len(),
            fragments.top_level.len(),
            canonical_path.display()
        );

        Ok(Self {
            file_path: canonical_path,
            fragments,
        })
    }

    /// Creates an adapter for `config.yaml` in the OS-appropriate configuration
    /// directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "storefront")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.yaml")
    }

    /// Creates an adapter for a custom file name in the default location.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier
    /// * `filename` - The fragment file name (e.g., "fragments.yaml")
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the path to the fragment file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl FragmentSource for YamlFragmentAdapter {
    fn name(&self) -> &str {
        "yaml-file"
    }

    fn fragments(&self) -> Result<ExtensionFragments> {
        Ok(self.fragments.clone())
    }
}
