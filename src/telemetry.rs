//! Structured logging setup.

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Installs a `tracing` subscriber writing formatted events to stderr.
///
/// The filter is read from `RUST_LOG`, e.g. `RUST_LOG=colonnade=debug`.
/// Returns `false` when a global subscriber is already installed, which
/// makes repeated calls from tests harmless.
#[must_use]
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
