//! Data Transfer Objects
//!
//! Raw caller input, as submitted by a form or API client, and its
//! conversion into validated domain types.

mod position_dto;
mod roll_dto;

pub use position_dto::PositionForm;
pub use roll_dto::{RollDecisionDto, RollProposalForm};
