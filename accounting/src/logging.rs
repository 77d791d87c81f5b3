//! Diagnostics for the accounting binary.
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG`. They are separate
//! from the call records, which `instrument::LogSink` always appends to the
//! configured `.log` files whatever the filter says.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Install the global subscriber. Call once, before any command runs.
///
/// Without `RUST_LOG` only warnings and errors are shown, which covers
/// slow-call reports and lost call records. Unparsable directives are
/// skipped rather than aborting the run.
///
/// ```bash
/// RUST_LOG=instrument=debug accounting run
/// ```
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
