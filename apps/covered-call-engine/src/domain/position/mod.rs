//! Covered-Call Position Bounded Context
//!
//! A position is one short call sold against 100 shares per contract.
//! It is created `Open`, may be amended or re-marked, and is closed exactly
//! once. Derived metrics are never stored here; see [`crate::metrics`].

pub mod aggregate;
pub mod errors;
pub mod value_objects;

pub use aggregate::{NewPosition, Position};
pub use errors::PositionError;
pub use value_objects::{BufferRisk, Moneyness, PositionStatus};
