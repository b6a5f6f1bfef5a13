//! Field-level validation errors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::domain::shared::DomainError;
use crate::domain::shared::bounds::{ensure_amount, ensure_magnitude, ensure_price};

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Field name as submitted.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<DomainError> for ValidationError {
    fn from(err: DomainError) -> Self {
        let field = err.field().unwrap_or("record").to_string();
        let message = match err {
            DomainError::InvalidValue { message, .. } => message,
            other => other.to_string(),
        };
        Self { field, message }
    }
}

/// Every field rejected in one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("validation failed: {}", joined(.errors))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record a rejected field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError::new(field, message));
    }

    /// Record a domain rule violation under its own field.
    pub fn record(&mut self, err: DomainError) {
        self.errors.push(err.into());
    }

    /// Whether nothing was rejected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Rejected fields in submission order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether `field` was rejected.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// `Ok(value)` when nothing was rejected.
    ///
    /// # Errors
    ///
    /// Returns `self` if any field was rejected.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }

    /// Parse an ISO-8601 calendar date, recording a failure.
    pub fn date(&mut self, field: &str, raw: &str) -> Option<NaiveDate> {
        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.push(field, format!("'{raw}' is not a valid date (YYYY-MM-DD)"));
                None
            }
        }
    }

    /// Convert a float to a decimal, recording NaN, Infinity and values
    /// beyond Decimal's range as failures.
    pub fn decimal(&mut self, field: &str, raw: f64) -> Option<Decimal> {
        if let Ok(value) = Decimal::try_from(raw) {
            Some(value)
        } else if raw.is_finite() {
            self.push(field, "is out of range");
            None
        } else {
            self.push(field, "must be a finite number");
            None
        }
    }

    /// A stock or strike price; see [`ensure_price`].
    pub fn price(&mut self, field: &str, raw: f64) -> Option<Decimal> {
        let value = self.decimal(field, raw)?;
        self.keep(ensure_price(field, value), value)
    }

    /// A zero-or-more amount no larger than `max`; see [`ensure_amount`].
    pub fn amount(&mut self, field: &str, raw: f64, max: Decimal) -> Option<Decimal> {
        let value = self.decimal(field, raw)?;
        self.keep(ensure_amount(field, value, max), value)
    }

    /// A signed figure no larger than `max` in magnitude; see [`ensure_magnitude`].
    pub fn signed(&mut self, field: &str, raw: f64, max: Decimal) -> Option<Decimal> {
        let value = self.decimal(field, raw)?;
        self.keep(ensure_magnitude(field, value, max), value)
    }

    /// A fraction in [0, 1], such as an option delta.
    pub fn fraction(&mut self, field: &str, raw: f64) -> Option<Decimal> {
        let value = self.decimal(field, raw)?;
        if (Decimal::ZERO..=Decimal::ONE).contains(&value) {
            Some(value)
        } else {
            self.push(field, "must be between 0 and 1");
            None
        }
    }

    fn keep(&mut self, check: Result<(), DomainError>, value: Decimal) -> Option<Decimal> {
        match check {
            Ok(()) => Some(value),
            Err(err) => {
                self.record(err);
                None
            }
        }
    }
}

fn joined(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<DomainError> for ValidationErrors {
    fn from(err: DomainError) -> Self {
        Self {
            errors: vec![err.into()],
        }
    }
}

impl From<Vec<DomainError>> for ValidationErrors {
    fn from(errors: Vec<DomainError>) -> Self {
        Self {
            errors: errors.into_iter().map(ValidationError::from).collect(),
        }
    }
}
