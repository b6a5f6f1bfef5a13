//! Tracing Setup
//!
//! Installs a `tracing-subscriber` formatter from [`LoggingConfig`].
//!
//! # Configuration
//!
//! - `observability.logging.level`: default filter (e.g. `info`, `covered_call_engine=debug`)
//! - `observability.logging.format`: `pretty` (human) or `json` (one object per line)
//! - `RUST_LOG`: overrides the configured level when set

use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::LoggingConfig;

/// Build the filter: `RUST_LOG` first, then the configured level, then `info`.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global subscriber.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
/// Calling this twice is harmless; the second call keeps the first subscriber.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = env_filter(config);
    let result = if config.format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
    };

    if result.is_ok() {
        tracing::debug!(level = %config.level, format = %config.format, "Tracing initialized");
    }
}
