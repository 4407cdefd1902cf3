//! Diagnostic tracing for the drills binary.
//!
//! Drill prompts and answers go to stdout; tracing goes to stderr so it never
//! mixes with what a user (or a pipe) reads.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber before any drill starts.
///
/// Filtering comes from `RUST_LOG` and falls back to `warn`, so a plain run
/// only reports closed input and similar warnings. `debug` shows rejected
/// lists and config resolution; `trace` echoes every console answer.
///
/// ```bash
/// RUST_LOG=drills=debug drills smallest
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
