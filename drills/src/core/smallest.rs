//! Validate a comma-separated number list and pick its smallest values.

use serde::Serialize;
use thiserror::Error;

use crate::core::numbers::{NotANumber, parse_number};

/// Why a raw number list could not be turned into a result.
///
/// Both variants are recoverable: callers render a message and ask again.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// Fewer tokens than the required minimum.
    #[error("invalid list: only {actual_count} numbers given")]
    TooFewNumbers { actual_count: usize },
    /// A token that does not parse as an integer.
    #[error("invalid list: '{token}' is not a number")]
    NotANumber { token: String },
}

/// Return the `k` smallest values of `raw_input`, ascending.
///
/// `raw_input` is split on commas and each token is trimmed. The token count
/// is checked against `min_count` before any token is parsed, so `"5,x"` with
/// `min_count = 5` reports [`ValidationError::TooFewNumbers`]. Duplicates are
/// kept: `"3,3,3,3,3"` yields `[3, 3, 3]` for `k = 3`.
///
/// Callers must keep `k <= min_count`; config validation enforces this.
pub fn smallest_n(
    raw_input: &str,
    min_count: usize,
    k: usize,
) -> Result<Vec<i64>, ValidationError> {
    debug_assert!(
        k <= min_count,
        "k ({k}) must not exceed min_count ({min_count})"
    );

    let tokens: Vec<&str> = raw_input.split(',').map(str::trim).collect();
    if tokens.len() < min_count {
        return Err(ValidationError::TooFewNumbers {
            actual_count: tokens.len(),
        });
    }

    let mut numbers = tokens
        .into_iter()
        .map(parse_number)
        .collect::<Result<Vec<_>, NotANumber>>()?;
    numbers.sort_unstable();
    numbers.truncate(k);
    Ok(numbers)
}
