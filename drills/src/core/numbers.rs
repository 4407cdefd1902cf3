//! Integer token parsing and list rendering shared by the number drills.

use thiserror::Error;

use crate::core::smallest::ValidationError;

/// A token that does not parse as an `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{token}' is not a number")]
pub struct NotANumber {
    pub token: String,
}

impl From<NotANumber> for ValidationError {
    fn from(err: NotANumber) -> Self {
        ValidationError::NotANumber { token: err.token }
    }
}

/// Parse one token as an integer, trimming surrounding whitespace.
///
/// Values outside the `i64` range are rejected like any other non-number.
pub fn parse_number(token: &str) -> Result<i64, NotANumber> {
    let token = token.trim();
    token.parse::<i64>().map_err(|_| NotANumber {
        token: token.to_string(),
    })
}

/// Render numbers comma-joined without spaces (`1,2,5`).
pub fn join_numbers(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_trims_and_accepts_signs() {
        assert_eq!(parse_number("  42 ").expect("parse"), 42);
        assert_eq!(parse_number("-7").expect("parse"), -7);
        assert_eq!(parse_number("+3").expect("parse"), 3);
    }

    #[test]
    fn parse_number_reports_trimmed_token() {
        let err = parse_number(" 4x ").expect_err("not a number");
        assert_eq!(err.token, "4x");
        assert_eq!(err.to_string(), "'4x' is not a number");
        assert_eq!(
            ValidationError::from(err),
            ValidationError::NotANumber {
                token: "4x".to_string()
            }
        );
    }

    #[test]
    fn parse_number_rejects_overflow() {
        assert!(parse_number("99999999999999999999").is_err());
    }

    #[test]
    fn join_numbers_has_no_spaces() {
        assert_eq!(join_numbers(&[1, 2, 5]), "1,2,5");
        assert_eq!(join_numbers(&[]), "");
    }
}
