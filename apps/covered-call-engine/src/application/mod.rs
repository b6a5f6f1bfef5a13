//! Application Layer
//!
//! Orchestrates the domain and metrics layers for callers:
//!
//! - **DTOs**: raw form input and its conversion into domain types
//! - **Validation**: field-level errors reported together
//! - **Use Cases**: enrichment, roll analysis and roll execution

pub mod dto;
pub mod error;
pub mod use_cases;
pub mod validation;

pub use dto::*;
pub use error::ApplicationError;
pub use use_cases::*;
pub use validation::{ValidationError, ValidationErrors};
