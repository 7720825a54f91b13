//! Diagnostic logging setup.
//!
//! Game output goes to stdout; tracing events from the engine and bots go to stderr, filtered by
//! `RUST_LOG` (default `warn`).

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Initialize logging for the binary. A second call is a no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    // Already installed (tests, embedding) is fine.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
