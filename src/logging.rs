//! Diagnostic logging. Output goes to stderr so stdout only carries titles.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
