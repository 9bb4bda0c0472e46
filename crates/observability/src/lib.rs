//! Shared logging setup for the service and client binaries.

use tracing_subscriber::EnvFilter;

/// Install the process-wide tracing subscriber.
///
/// Emits JSON lines with timestamps; verbosity is taken from `RUST_LOG` and
/// defaults to `info`. Calling this more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
