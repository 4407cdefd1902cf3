//! Deterministic, pure logic behind each drill.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests; prompting and
//! retrying live in [`crate::session`].

pub mod distinct;
pub mod likes;
pub mod numbers;
pub mod reverse;
pub mod smallest;
pub mod unique;
