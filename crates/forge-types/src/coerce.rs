//! Strict coercion of loosely-typed request input.
//!
//! Numeric fields may arrive as JSON numbers or as text (HTML number inputs
//! submit strings). Text must be a complete base-10 integer after trimming;
//! partial parses such as `"10abc"` are rejected instead of truncated.

use thiserror::Error;

/// A required field was missing or could not be converted to its type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("missing required field `{0}`")]
    Missing(&'static str),

    #[error("field `{0}` must not be blank")]
    Blank(&'static str),

    #[error("field `{field}` must be an integer, got {value:?}")]
    NotAnInteger { field: &'static str, value: String },
}

/// Parse `raw` as an `i64`, naming `field` in the error.
pub fn parse_integer(field: &'static str, raw: &str) -> Result<i64, CoercionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoercionError::Blank(field));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| CoercionError::NotAnInteger {
            field,
            value: raw.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_padded_integers() {
        assert_eq!(parse_integer("duration", "10"), Ok(10));
        assert_eq!(parse_integer("duration", " 42 "), Ok(42));
        assert_eq!(parse_integer("id", "-3"), Ok(-3));
    }

    #[test]
    fn rejects_partial_numbers() {
        assert_eq!(
            parse_integer("duration", "10abc"),
            Err(CoercionError::NotAnInteger {
                field: "duration",
                value: "10abc".into()
            })
        );
        assert!(parse_integer("duration", "2.5").is_err());
        assert!(parse_integer("id", "abc").is_err());
    }

    #[test]
    fn blank_is_its_own_error() {
        assert_eq!(parse_integer("id", "   "), Err(CoercionError::Blank("id")));
    }

    #[test]
    fn error_message_names_the_field() {
        let err = parse_integer("duration", "ten").unwrap_err();
        assert_eq!(
            err.to_string(),
            "field `duration` must be an integer, got \"ten\""
        );
    }
}
