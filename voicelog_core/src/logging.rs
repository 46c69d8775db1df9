//! Logging infrastructure for Voicelog.
//!
//! Provides centralized tracing setup for host binaries; the engine itself
//! only emits `tracing` events and never installs a subscriber.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with sensible defaults
///
/// Default level is WARN so parse output stays clean on stdout; override
/// with the RUST_LOG env var or a config file level.
pub fn init() {
    init_with_level("warn")
}

/// Initialize logging with a specific default level
///
/// RUST_LOG still takes precedence when set.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
