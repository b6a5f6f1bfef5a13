//! Ticker value object for underlying symbols.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Maximum accepted length of an underlying ticker.
const MAX_TICKER_LEN: usize = 10;

/// An underlying equity ticker, e.g. "AAPL" or "BRK.B".
///
/// The ticker is normalized to uppercase on construction, including when
/// read from a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Create a new Ticker, normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_uppercase())
    }

    /// Get the ticker string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate the ticker.
    ///
    /// # Errors
    ///
    /// Returns error if the ticker is empty, too long or contains characters
    /// other than ASCII alphanumerics and `.`.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            return Err(DomainError::invalid_value("ticker", "Ticker is required"));
        }

        if self.0.len() > MAX_TICKER_LEN {
            return Err(DomainError::invalid_value(
                "ticker",
                "Ticker exceeds maximum length",
            ));
        }

        if !self.0.chars().all(|c| c.is_ascii_alphanumeric() || c == '.') {
            return Err(DomainError::invalid_value(
                "ticker",
                "Ticker contains invalid characters",
            ));
        }

        Ok(())
    }

    /// Build the call option symbol for this underlying.
    ///
    /// Format: `{TICKER}{YYMMDD}C{STRIKE}` where the strike is multiplied by
    /// 1000 and left-padded with zeros to 8 characters.
    #[must_use]
    pub fn call_option_symbol(&self, expiration: NaiveDate, strike: Decimal) -> String {
        let strike_milli = (strike * Decimal::ONE_THOUSAND).normalize();
        format!(
            "{}{}C{:0>8}",
            self.0,
            expiration.format("%y%m%d"),
            strike_milli.to_string()
        )
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Ticker {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
