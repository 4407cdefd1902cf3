//! Collect a fixed number of unique values, rejecting repeats.

use thiserror::Error;

/// The offered number was already collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} was already entered")]
pub struct DuplicateNumber(pub i64);

/// Collection progress after an accepted offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collected {
    /// More unique numbers are still needed.
    Pending { remaining: usize },
    /// Target reached; values sorted ascending.
    Complete(Vec<i64>),
}

/// Accepts numbers until `target` distinct values have been seen.
#[derive(Debug, Clone)]
pub struct UniqueCollector {
    target: usize,
    numbers: Vec<i64>,
}

impl UniqueCollector {
    pub fn new(target: usize) -> Self {
        Self {
            target,
            numbers: Vec::with_capacity(target),
        }
    }

    /// Offer one number.
    ///
    /// A repeat is rejected without changing state. Once complete, further
    /// offers are ignored and the same sorted values are returned.
    pub fn offer(&mut self, number: i64) -> Result<Collected, DuplicateNumber> {
        if self.is_complete() {
            return Ok(self.progress());
        }
        if self.numbers.contains(&number) {
            return Err(DuplicateNumber(number));
        }
        self.numbers.push(number);
        Ok(self.progress())
    }

    pub fn is_complete(&self) -> bool {
        self.numbers.len() >= self.target
    }

    fn progress(&self) -> Collected {
        if self.is_complete() {
            let mut sorted = self.numbers.clone();
            sorted.sort_unstable();
            Collected::Complete(sorted)
        } else {
            Collected::Pending {
                remaining: self.target - self.numbers.len(),
            }
        }
    }
}
