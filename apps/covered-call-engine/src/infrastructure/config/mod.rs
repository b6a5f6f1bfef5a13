//! Runtime settings: log output, the "today" override and the backup file.
//!
//! Read from `covered-call.yaml` when present. Values may reference the
//! environment as `${VAR}` or `${VAR:-default}`; absent sections take their
//! defaults.
//!
//! ```rust,ignore
//! let config = covered_call_engine::infrastructure::config::load_config(None)?;
//! let today = config.clock.as_of_date()?;
//! ```

mod backup;
mod clock;
mod observability;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use backup::BackupConfig;
pub use clock::ClockConfig;
pub use observability::{LOG_FORMATS, LoggingConfig, ObservabilityConfig};

/// Default configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "covered-call.yaml";

/// Why settings could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read, or an explicit path is missing.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// File that was requested.
        path: String,
        /// Filesystem error.
        source: std::io::Error,
    },

    /// Not YAML, or a key has the wrong shape.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Parsed but out of range, e.g. an unknown log format.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// All settings, each section optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log level and format.
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Reference-date override.
    #[serde(default)]
    pub clock: ClockConfig,
    /// Backup file location.
    #[serde(default)]
    pub backup: BackupConfig,
}

/// Read settings from `path`, or from [`DEFAULT_CONFIG_PATH`] when `None`.
///
/// A missing default file yields [`Config::default`]; a missing explicit
/// path is an error.
///
/// # Errors
///
/// See [`ConfigError`].
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let explicit = path.is_some();
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if !explicit && e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_string(),
                source: e,
            });
        }
    };

    load_config_from_string(&contents)
}

/// Parse settings text. Blank text (after interpolation) means all defaults.
///
/// # Errors
///
/// [`ConfigError::ParseError`] or [`ConfigError::ValidationError`].
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    if interpolated.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Expand `${VAR}` and `${VAR:-default}`. Unset or empty variables take the default.
#[allow(clippy::expect_used)] // constant pattern
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static PLACEHOLDER: OnceLock<regex::Regex> = OnceLock::new();

    let re = PLACEHOLDER.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("placeholder pattern compiles")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let fallback = cap.get(2).map_or("", |m| m.as_str());
        std::env::var(&cap[1])
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    })
    .into_owned()
}

/// Range checks serde cannot express.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    if config.observability.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "observability.logging.level must not be empty".to_string(),
        ));
    }

    config.clock.as_of_date()?;

    if config.backup.path.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "backup.path must not be empty".to_string(),
        ));
    }

    Ok(())
}
