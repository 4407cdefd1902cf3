//! Stable exit codes for drill CLI commands.

/// Drill finished, or a one-shot list validated.
pub const OK: i32 = 0;
/// Invalid config, unknown menu choice, rejected one-shot list, or other errors.
pub const INVALID: i32 = 1;
/// Input ended before the drill could finish.
pub const INPUT_CLOSED: i32 = 2;
