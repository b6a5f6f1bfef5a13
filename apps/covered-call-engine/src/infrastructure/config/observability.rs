//! Log output settings.

use serde::{Deserialize, Serialize};

/// `observability:` section. Only logging is configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ObservabilityConfig {
    /// `observability.logging`.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Level and format for the stderr log stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format: `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Accepted values of [`LoggingConfig::format`].
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
