//! List and array console drills.
//!
//! Each drill is a small, self-contained exercise. The crate keeps a strict
//! separation:
//!
//! - **[`core`]**: Pure, deterministic logic (validation, sorting, rendering).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Config loading and the line-oriented [`io::console::Console`].
//!
//! [`session`] wraps each core function in the prompt/retry loop a user sees,
//! and [`report`] shapes one-shot results for machine consumers.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
