//! Tracing setup for hosts and tests.
//!
//! The crate itself only emits `tracing` events; installing a subscriber is
//! the host's call. `init` wires up an `EnvFilter`-driven fmt subscriber
//! (`RUST_LOG` controls verbosity, default `info`).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();
}

/// Installs a global JSON subscriber filtered by `RUST_LOG`, for hosts that
/// ship logs to a collector.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init_json() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}
