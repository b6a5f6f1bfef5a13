//! Application errors.

use thiserror::Error;

use super::validation::ValidationErrors;
use crate::domain::position::PositionError;

/// Failure of a use case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Submitted input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The position cannot take the requested transition.
    #[error(transparent)]
    Position(#[from] PositionError),
}
