//! Shared Domain Types
//!
//! Value objects and errors shared across bounded contexts.

pub mod bounds;
pub mod errors;
pub mod format;
pub mod value_objects;

pub use errors::DomainError;
pub use format::format_fixed;
pub use value_objects::{Clock, FixedClock, Money, PositionId, SystemClock, Ticker, Timestamp};
