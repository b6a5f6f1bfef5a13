//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Aggregates**: The covered-call [`position::Position`] and its lifecycle
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: The stateless roll recommendation engine
//!
//! # Bounded Contexts
//!
//! - [`position`]: Covered-call position records (open, amend, mark, close)
//! - [`roll`]: Roll proposals, scoring rules and recommendations
//! - [`shared`]: Money, identifiers, tickers, timestamps and the clock

pub mod position;
pub mod roll;
pub mod shared;
