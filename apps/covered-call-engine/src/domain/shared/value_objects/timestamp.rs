//! Instants recorded on positions and backups.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC instant, e.g. when a position was closed or a backup taken.
///
/// Serialized as RFC 3339 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wrap a UTC instant.
    #[must_use]
    pub const fn new(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Current instant.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Midnight UTC at the start of `date`.
    #[must_use]
    pub fn start_of_day(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Parse RFC 3339 text; any offset is normalized to UTC.
    ///
    /// # Errors
    ///
    /// Returns error if `s` is not RFC 3339.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s).map(|dt| Self(dt.with_timezone(&Utc)))
    }

    /// UTC calendar date of the instant.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_normalize_to_utc() {
        let ts = Timestamp::parse("2025-01-20T10:30:00-05:00").unwrap();
        assert_eq!(ts.to_string(), "2025-01-20T15:30:00+00:00");
        assert_eq!(ts, Timestamp::parse("2025-01-20T15:30:00Z").unwrap());
    }

    #[test]
    fn date_is_utc_calendar_day() {
        let late = Timestamp::parse("2025-01-31T23:30:00-05:00").unwrap();
        assert_eq!(late.date(), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    }

    #[test]
    fn start_of_day_is_midnight() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 16).unwrap();
        assert_eq!(
            Timestamp::start_of_day(date).to_string(),
            "2025-01-16T00:00:00+00:00"
        );
    }

    #[test]
    fn rejects_calendar_dates_without_time() {
        assert!(Timestamp::parse("2025-01-16").is_err());
    }
}
