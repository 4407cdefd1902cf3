//! First-occurrence de-duplication.

use std::collections::HashSet;

/// Keep the first occurrence of each value, in input order.
pub fn distinct_in_order(numbers: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::new();
    numbers
        .iter()
        .copied()
        .filter(|number| seen.insert(*number))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_order() {
        assert_eq!(distinct_in_order(&[3, 1, 3, 2, 1, 5]), vec![3, 1, 2, 5]);
    }

    #[test]
    fn empty_stays_empty() {
        assert!(distinct_in_order(&[]).is_empty());
    }
}
