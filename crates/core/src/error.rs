use thiserror::Error;

use crate::config::{EnvironmentError, SchemaError};
use crate::lookup::ParseError;
use crate::provider::{LookupError, ValidationError};
use crate::rewrite::UpdateError;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Every failure class of a beacon run.
///
/// None of these are recovered locally: each aborts the run and surfaces to
/// the caller as a distinct, identifiable failure.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Lookup descriptor failure: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration failure: {0}")]
    Schema(#[from] SchemaError),

    #[error("Environment failure: {0}")]
    Environment(#[from] EnvironmentError),

    #[error("Lookup failure: {0}")]
    Lookup(#[from] LookupError),

    #[error("Lookup result failure: {0}")]
    Validation(#[from] ValidationError),

    #[error("Target update failure: {0}")]
    Update(#[from] UpdateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_message() {
        let err = CoreError::from(ParseError::MissingArgumentList {
            input: "echo".to_string(),
        });
        assert!(err.to_string().starts_with("Lookup descriptor failure"));
        assert!(err.to_string().contains("'echo'"));
    }

    #[test]
    fn each_failure_class_is_distinguishable() {
        let err = CoreError::from(ValidationError::MissingAddress);
        assert!(matches!(err, CoreError::Validation(_)));

        let err = CoreError::from(EnvironmentError::Unset {
            name: "X".to_string(),
        });
        assert!(matches!(err, CoreError::Environment(_)));
    }
}
