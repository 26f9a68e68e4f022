//! Logging setup
//!
//! The library only emits `tracing` events. Binaries install a subscriber
//! here; output goes to stderr so stdout stays reserved for parsed data.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber
///
/// # Environment
///
/// - `RUST_LOG`: log filter (default: `warn`), e.g. `RUST_LOG=csv_row_parser=debug`
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // try_init: a subscriber may already be installed when embedded in tests
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
