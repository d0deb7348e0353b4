//! Tracing/logging initialization
//!
//! Log records go to stderr so they never interleave with the menu on
//! stdout. `RUST_LOG` takes precedence over the configured filter.

use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, falling back to `default_filter`
pub fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
