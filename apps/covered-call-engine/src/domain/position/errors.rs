//! Position Errors

use thiserror::Error;

use crate::domain::shared::DomainError;

/// Errors that can occur with covered-call positions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A field or invariant of the position is invalid.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The operation requires an open position.
    #[error("Position {position_id} is not open")]
    NotOpen {
        /// Position that was closed.
        position_id: String,
    },
}
