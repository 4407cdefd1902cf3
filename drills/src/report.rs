//! Machine-readable result of a one-shot smallest-numbers check.

use serde::Serialize;

use crate::core::smallest::ValidationError;

/// JSON report printed by `drills smallest --numbers ... --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SmallestReport {
    Ok { smallest: Vec<i64> },
    Invalid { error: ValidationError },
}

impl From<Result<Vec<i64>, ValidationError>> for SmallestReport {
    fn from(result: Result<Vec<i64>, ValidationError>) -> Self {
        match result {
            Ok(smallest) => SmallestReport::Ok { smallest },
            Err(error) => SmallestReport::Invalid { error },
        }
    }
}
