//! Error types for provider dispatch and result validation

use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

use crate::lookup::Strategy;

/// Provider-level failures: the lookup itself could not produce a result.
///
/// These are fatal; no provider is retried.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Lookup strategy '{strategy}' expects {expected} argument(s), got {actual}")]
    WrongArgumentCount {
        strategy: Strategy,
        expected: &'static str,
        actual: usize,
    },

    #[error("Network interface '{name}' not found (available: {available:?})")]
    InterfaceNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Network interface '{name}' exposes no usable address")]
    InterfaceWithoutAddress { name: String },

    #[error("Failed to run lookup command '{command}'")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Lookup command '{command}' did not finish within {timeout:?}")]
    CommandTimeout { command: String, timeout: Duration },

    #[error("Lookup command '{command}' exited with {status}: {output}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        output: String,
    },

    #[error("Lookup command '{command}' produced non-JSON output")]
    CommandOutput {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid HTTP method '{method}' for http lookup")]
    InvalidMethod { method: String },

    #[error("HTTP lookup request to '{url}' failed")]
    HttpRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP lookup to '{url}' returned status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("HTTP lookup to '{url}' returned a non-JSON body")]
    HttpBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Structural failures of a provider's result.
///
/// Raised by the single trust boundary between external data and the address
/// used to mutate files; distinct from transport-level [`LookupError`]s.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Lookup result must be a mapping, got {actual}")]
    NotAMapping { actual: &'static str },

    #[error("Lookup result is missing the required 'external_address' key")]
    MissingAddress,

    #[error("Lookup result field 'external_address' must be a string, got {actual}")]
    WrongAddressType { actual: &'static str },

    #[error("Lookup result field 'external_address' is empty")]
    EmptyAddress,
}
