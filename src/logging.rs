//! Logging setup for the `geonames` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is up
//! to the application. Output goes to stderr so stdout stays pure JSON.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// `verbose` raises the fallback level to `debug`. Calling this twice is a
/// no-op, so tests and embedders can call it freely.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "geonamescache=debug" } else { DEFAULT_FILTER };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
