//! Descriptor parser implementation

use crate::lookup::descriptor::{LookupDescriptor, Strategy};
use crate::lookup::error::ParseError;

/// Parse lookup descriptor text into a [`LookupDescriptor`].
///
/// The grammar is `strategy "(" args ")"` where `strategy` is one of
/// `interface`, `echo`, `exec`, `http` and `args` is a comma-separated list
/// of zero or more tokens. Tokens are trimmed of surrounding whitespace.
/// The whole string must match; leading or trailing text fails the parse.
pub fn parse_lookup(input: &str) -> Result<LookupDescriptor, ParseError> {
    let Some((name, rest)) = input.split_once('(') else {
        return Err(ParseError::MissingArgumentList {
            input: input.to_string(),
        });
    };

    let strategy = Strategy::from_name(name).ok_or_else(|| ParseError::UnknownStrategy {
        strategy: name.to_string(),
    })?;

    let Some(body) = rest.strip_suffix(')') else {
        return Err(if rest.contains(')') {
            ParseError::TrailingCharacters {
                input: input.to_string(),
            }
        } else {
            ParseError::UnterminatedArgumentList {
                input: input.to_string(),
            }
        });
    };

    if body.contains('(') || body.contains(')') {
        return Err(ParseError::NestedParentheses {
            input: input.to_string(),
        });
    }

    let args = if body.trim().is_empty() {
        Vec::new()
    } else {
        body.split(',').map(|arg| arg.trim().to_string()).collect()
    };

    Ok(LookupDescriptor { strategy, args })
}
