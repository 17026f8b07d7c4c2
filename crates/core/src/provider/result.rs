//! Result validation: the trust boundary for provider output

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::provider::error::ValidationError;

/// The sole valid shape of a lookup result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressResult {
    pub external_address: String,
}

/// Validate a raw provider result.
///
/// The value must be a mapping with a non-empty string `external_address`
/// key (exact key match). Valid input passes through unchanged; everything
/// else is a [`ValidationError`]. Every provider's output crosses this
/// boundary before it is used to mutate files.
pub fn validate_result(value: &Value) -> Result<AddressResult, ValidationError> {
    let mapping = value.as_object().ok_or_else(|| ValidationError::NotAMapping {
        actual: value_type_name(value),
    })?;

    let address = mapping
        .get("external_address")
        .ok_or(ValidationError::MissingAddress)?;

    let address = address
        .as_str()
        .ok_or_else(|| ValidationError::WrongAddressType {
            actual: value_type_name(address),
        })?;

    if address.is_empty() {
        return Err(ValidationError::EmptyAddress);
    }

    Ok(AddressResult {
        external_address: address.to_string(),
    })
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
