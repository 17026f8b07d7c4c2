//! Environment-reference expansion for configuration scalars
//!
//! A scalar may embed one or more `<%= ENV['NAME'] %>` markers; each is
//! replaced with the runtime value of `NAME`, preserving the literal text
//! around it. Expansion operates on a locally parsed document value, so no
//! parser-global resolver state is involved.

use std::env::{self, VarError};

use lazy_static::lazy_static;
use regex::Regex;
use serde_yaml::{Mapping, Value};

use crate::config::error::EnvironmentError;

lazy_static! {
    static ref ENV_REFERENCE: Regex =
        Regex::new(r"<%= ENV\['([^']+)'\] %>").expect("environment reference pattern is valid");
}

/// Expand every environment reference in a single scalar string.
pub fn expand_scalar(value: &str) -> Result<String, EnvironmentError> {
    let mut output = String::with_capacity(value.len());
    let mut literal_start = 0;

    for captures in ENV_REFERENCE.captures_iter(value) {
        let (Some(marker), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        let resolved = env::var(name.as_str()).map_err(|source| match source {
            VarError::NotPresent => EnvironmentError::Unset {
                name: name.as_str().to_string(),
            },
            VarError::NotUnicode(_) => EnvironmentError::NotUnicode {
                name: name.as_str().to_string(),
            },
        })?;

        output.push_str(&value[literal_start..marker.start()]);
        output.push_str(&resolved);
        literal_start = marker.end();
    }

    output.push_str(&value[literal_start..]);
    Ok(output)
}

/// Expand environment references in every scalar string of a document.
pub(crate) fn expand_document(value: Value) -> Result<Value, EnvironmentError> {
    match value {
        Value::String(scalar) => Ok(Value::String(expand_scalar(&scalar)?)),
        Value::Sequence(items) => {
            let expanded: Result<Vec<Value>, EnvironmentError> =
                items.into_iter().map(expand_document).collect();
            Ok(Value::Sequence(expanded?))
        }
        Value::Mapping(mapping) => {
            let mut expanded = Mapping::new();
            for (key, entry) in mapping {
                expanded.insert(expand_document(key)?, expand_document(entry)?);
            }
            Ok(Value::Mapping(expanded))
        }
        other => Ok(other),
    }
}
