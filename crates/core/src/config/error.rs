//! Error types for configuration loading

use std::path::PathBuf;

use thiserror::Error;

/// The configuration file is unreadable or does not match the schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to read configuration file '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file '{path}' as YAML")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Configuration file '{path}' does not match the schema at '{field}'")]
    Shape {
        path: PathBuf,
        field: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("target_files must contain between 1 and 1000 entries, got {count}")]
    TargetCountOutOfRange { count: usize },

    #[error("target_files contains duplicate entry '{entry}'")]
    DuplicateTarget { entry: String },
}

/// A referenced environment variable cannot be resolved.
///
/// Unresolved references are a hard failure, never a silent empty
/// substitution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("Referenced environment variable '{name}' is not set")]
    Unset { name: String },

    #[error("Referenced environment variable '{name}' is not valid unicode")]
    NotUnicode { name: String },
}
