//! Analyze Roll Use Case
//!
//! Computes the roll metrics for a position and scores them.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::application::dto::RollProposalForm;
use crate::application::error::ApplicationError;
use crate::domain::position::Position;
use crate::domain::roll::{Recommendation, RollProposal, analyze_roll_decision};
use crate::domain::shared::Clock;
use crate::metrics::RollMetrics;

/// Roll metrics and the recommendation derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollAnalysis {
    /// Position being rolled.
    pub position_id: String,
    /// Derived roll values.
    pub metrics: RollMetrics,
    /// Scored recommendation.
    pub recommendation: Recommendation,
}

/// Use case for analyzing a prospective roll.
pub struct AnalyzeRollUseCase<C>
where
    C: Clock,
{
    clock: Arc<C>,
}

impl<C> AnalyzeRollUseCase<C>
where
    C: Clock,
{
    /// Create a new `AnalyzeRollUseCase`.
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Analyze a roll from raw form input.
    ///
    /// # Errors
    ///
    /// Returns error if the position is closed or the form is invalid.
    pub fn execute_form(
        &self,
        position: &Position,
        form: &RollProposalForm,
    ) -> Result<RollAnalysis, ApplicationError> {
        position.ensure_open()?;
        let proposal = form.to_proposal(position)?;
        self.execute(position, &proposal)
    }

    /// Analyze a roll of `position` into `proposal`.
    ///
    /// # Errors
    ///
    /// Returns error if the position is closed or the proposal is invalid.
    pub fn execute(
        &self,
        position: &Position,
        proposal: &RollProposal,
    ) -> Result<RollAnalysis, ApplicationError> {
        position.ensure_open()?;
        proposal
            .validate_against(position)
            .map_err(|errors| ApplicationError::Validation(errors.into()))?;

        let metrics = RollMetrics::compute(position, proposal, self.clock.today());
        let recommendation = analyze_roll_decision(&metrics.decision_input());

        info!(
            position_id = %position.id(),
            action = %recommendation.action,
            score = recommendation.score,
            net_debit_credit = %metrics.net_debit_credit,
            "Roll analyzed"
        );

        Ok(RollAnalysis {
            position_id: position.id().to_string(),
            metrics,
            recommendation,
        })
    }
}
