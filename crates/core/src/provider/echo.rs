//! `echo` provider: literal address for testing and static configuration

use serde_json::{json, Value};

/// Join all arguments with `,` and wrap them as a lookup result.
///
/// Pure and deterministic; the only way this strategy fails is downstream,
/// when the joined string does not survive result validation.
pub(crate) fn join(args: &[String]) -> Value {
    json!({ "external_address": args.join(",") })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::result::validate_result;

    #[test]
    fn single_arg_is_returned_verbatim() {
        let value = join(&["10.0.0.5".to_string()]);
        assert_eq!(validate_result(&value).unwrap().external_address, "10.0.0.5");
    }

    #[test]
    fn multiple_args_are_joined_with_commas() {
        let value = join(&["bar".to_string(), "baz".to_string()]);
        assert_eq!(validate_result(&value).unwrap().external_address, "bar,baz");
    }

    #[test]
    fn no_args_produce_an_empty_address() {
        let value = join(&[]);
        assert_eq!(value["external_address"], "");
    }
}
