//! Domain errors shared by value objects and aggregates.

use std::fmt;

/// Rejections raised by positions, proposals and value objects.
///
/// Carries plain strings so it can cross into DTO validation unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A lifecycle move the current status forbids (closing twice).
    InvalidStateTransition {
        /// Kind of record, e.g. "Position".
        entity: String,
        /// Status before the move.
        from: String,
        /// Requested status.
        to: String,
        /// Why the move was refused.
        reason: String,
    },

    /// A single input field is out of range or malformed.
    InvalidValue {
        /// Input field, using the record's serialized name.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// A loaded record contradicts itself, e.g. closed without a close price.
    InvariantViolation {
        /// Kind of record.
        aggregate: String,
        /// Rule the record breaks.
        invariant: String,
        /// Offending values.
        state: String,
    },
}

impl DomainError {
    /// Shorthand for an [`DomainError::InvalidValue`].
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field name carried by the error, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStateTransition {
                entity,
                from,
                to,
                reason,
            } => {
                write!(
                    f,
                    "Invalid state transition for {entity}: {from} -> {to}: {reason}"
                )
            }
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::InvariantViolation {
                aggregate,
                invariant,
                state,
            } => {
                write!(
                    f,
                    "Invariant violation in {aggregate}: {invariant} (state: {state})"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
