//! Reference-date configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Clock configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// ISO date used as "today" instead of the system date.
    #[serde(default)]
    pub as_of: Option<String>,
}

impl ClockConfig {
    /// Parsed `as_of`, if set and non-blank.
    ///
    /// # Errors
    ///
    /// Returns error if `as_of` is not a `YYYY-MM-DD` date.
    pub fn as_of_date(&self) -> Result<Option<NaiveDate>, ConfigError> {
        match self.as_of.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| {
                    ConfigError::ValidationError(format!(
                        "clock.as_of must be a YYYY-MM-DD date, got '{raw}'"
                    ))
                }),
        }
    }
}
