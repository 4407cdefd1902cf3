//! Reverse a name character by character.

/// Reverse `name` by Unicode scalar value.
pub fn reverse_name(name: &str) -> String {
    name.chars().rev().collect()
}
