//! Error types for lookup descriptor parsing

use thiserror::Error;

/// Errors raised while parsing a lookup descriptor.
///
/// Parsing is all-or-nothing; there is no partial recovery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown lookup strategy '{strategy}' (expected interface, echo, exec, or http)")]
    UnknownStrategy { strategy: String },

    #[error("Lookup descriptor '{input}' is missing an argument list")]
    MissingArgumentList { input: String },

    #[error("Lookup descriptor '{input}' is missing its closing parenthesis")]
    UnterminatedArgumentList { input: String },

    #[error("Lookup descriptor '{input}' has trailing text after the closing parenthesis")]
    TrailingCharacters { input: String },

    #[error("Lookup descriptor '{input}' contains nested parentheses")]
    NestedParentheses { input: String },
}
