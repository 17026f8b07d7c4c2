//! Application configuration: schema, loading, environment expansion
//!
//! The configuration document recognizes exactly three top-level keys:
//! `lookup` (required), `target_files` (required, 1-1000 unique entries),
//! and `backup_enabled` (optional). Loading reads the file and the process
//! environment and nothing else; the source file is never written.

pub mod env;
pub mod error;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::{EnvironmentError, SchemaError};

pub const MIN_TARGET_FILES: usize = 1;
pub const MAX_TARGET_FILES: usize = 1000;

/// The application configuration document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Raw lookup descriptor text, parsed later by [`crate::lookup`]
    pub lookup: String,

    /// Target files whose service URL host will be rewritten, in order
    pub target_files: Vec<String>,

    /// Whether to write a `.bak` copy of each target before mutating it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_enabled: Option<bool>,
}

impl AppConfig {
    pub fn backup_enabled(&self) -> bool {
        self.backup_enabled.unwrap_or(false)
    }

    /// Enforce the bounds the serde shape cannot express: entry count and
    /// uniqueness of `target_files`.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let count = self.target_files.len();
        if !(MIN_TARGET_FILES..=MAX_TARGET_FILES).contains(&count) {
            return Err(SchemaError::TargetCountOutOfRange { count });
        }

        let mut seen = HashSet::new();
        for entry in &self.target_files {
            if !seen.insert(entry.as_str()) {
                return Err(SchemaError::DuplicateTarget {
                    entry: entry.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Load, expand, and validate the configuration document at `path`.
///
/// Environment references are expanded on the parsed document before it is
/// shaped into [`AppConfig`], so a reference may appear in any scalar.
pub fn load_config(path: &Path) -> crate::Result<AppConfig> {
    let content = fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|source| SchemaError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

    let document = env::expand_document(document)?;

    let config: AppConfig =
        serde_path_to_error::deserialize(document).map_err(|error| {
            let field = error.path().to_string();
            SchemaError::Shape {
                path: path.to_path_buf(),
                field,
                source: error.into_inner(),
            }
        })?;

    config.validate()?;
    debug!(
        lookup = %config.lookup,
        targets = config.target_files.len(),
        backup = config.backup_enabled(),
        "configuration loaded"
    );

    Ok(config)
}
