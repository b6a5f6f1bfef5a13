//! Roll Bounded Context
//!
//! Rolling closes an expiring short call and sells a new one further out.
//! This module holds the proposal for the new leg, the scoring inputs, the
//! fixed rule table and the stateless engine that turns a scored roll into a
//! ROLL / HOLD / NEUTRAL recommendation.

mod engine;
mod input;
mod proposal;
mod recommendation;
mod rules;

pub use engine::analyze_roll_decision;
pub use input::RollDecisionInput;
pub use proposal::RollProposal;
pub use recommendation::{Recommendation, RecommendationItem, RecommendationKind, RollAction};
pub use rules::{ROLL_RULES, RollRule, RuleOutcome};
