//! Error types for target-file rewriting

use std::path::PathBuf;

use thiserror::Error;

/// A target file could not be backed up, read, understood, or written.
///
/// Every variant names the offending path; processing stops at the first
/// failure.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Failed to back up target file '{path}'")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read target file '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse target file '{path}' as YAML")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Target file '{path}' is missing a string service.url field")]
    MissingServiceUrl { path: PathBuf },

    #[error("Target file '{path}' has an unparsable service.url '{url}'")]
    InvalidServiceUrl {
        path: PathBuf,
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Address '{address}' is not a valid host for service.url of '{path}'")]
    HostRewrite { path: PathBuf, address: String },

    #[error("Failed to serialize the updated document for '{path}'")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write target file '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UpdateError {
    /// The target file this error is about.
    pub fn path(&self) -> &PathBuf {
        match self {
            UpdateError::Backup { path, .. }
            | UpdateError::Read { path, .. }
            | UpdateError::Parse { path, .. }
            | UpdateError::MissingServiceUrl { path }
            | UpdateError::InvalidServiceUrl { path, .. }
            | UpdateError::HostRewrite { path, .. }
            | UpdateError::Serialize { path, .. }
            | UpdateError::Write { path, .. } => path,
        }
    }
}
