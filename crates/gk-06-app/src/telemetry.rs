//! # Logging Setup
//!
//! Process-wide tracing subscriber for whoever hosts the facade. Idempotent:
//! a second call is a no-op so tests can call it freely.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber: env-filtered, human-readable output.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
