//! Sends this crate's diagnostics to standard error.

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "contributor_cards=info";

/// Installs a `tracing` subscriber that writes to stderr, filtered by
/// `RUST_LOG` (default [`DEFAULT_FILTER`]). If the host already installed a
/// subscriber, that one stays in place and this does nothing.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Fails only when a global subscriber is already set.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
