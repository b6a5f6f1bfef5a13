//! Roll DTOs

use serde::{Deserialize, Serialize};

use crate::application::validation::ValidationErrors;
use crate::domain::position::Position;
use crate::domain::roll::{RollDecisionInput, RollProposal};
use crate::domain::shared::bounds::{MAX_METRIC, MAX_PRICE};

/// Roll proposal as submitted, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollProposalForm {
    /// ISO date of the new expiration.
    pub new_expiration_date: String,
    /// New strike.
    pub new_strike_price: f64,
    /// Per-share cost to buy back the current call.
    pub estimated_close_cost: f64,
    /// Per-share premium of the new call.
    pub new_premium_per_contract: f64,
    /// Delta of the new call.
    #[serde(default)]
    pub new_delta: Option<f64>,
}

impl RollProposalForm {
    /// Convert to a [`RollProposal`] checked against `position`.
    ///
    /// # Errors
    ///
    /// Returns every rejected field, whether or not the others parse.
    pub fn to_proposal(&self, position: &Position) -> Result<RollProposal, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let new_expiration_date = errors.date("new_expiration_date", &self.new_expiration_date);
        if let Some(date) = new_expiration_date
            && date <= position.expiration_date()
        {
            errors.push(
                "new_expiration_date",
                format!("must be after the current expiration {}", position.expiration_date()),
            );
        }
        let new_strike_price = errors.price("new_strike_price", self.new_strike_price);
        let estimated_close_cost =
            errors.amount("estimated_close_cost", self.estimated_close_cost, MAX_PRICE);
        let new_premium =
            errors.amount("new_premium_per_contract", self.new_premium_per_contract, MAX_PRICE);
        let new_delta = self.new_delta.map(|raw| errors.fraction("new_delta", raw));

        if !errors.is_empty() {
            return Err(errors);
        }
        let (
            Some(new_expiration_date),
            Some(new_strike_price),
            Some(estimated_close_cost),
            Some(new_premium_per_contract),
            new_delta,
        ) = (
            new_expiration_date,
            new_strike_price,
            estimated_close_cost,
            new_premium,
            new_delta.flatten(),
        )
        else {
            return Err(errors);
        };

        let proposal = RollProposal {
            new_expiration_date,
            new_strike_price,
            estimated_close_cost,
            new_premium_per_contract,
            new_delta,
        };
        proposal.validate_against(position)?;
        Ok(proposal)
    }
}

/// Scoring inputs as raw floats, for callers that skip [`RollProposal`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RollDecisionDto {
    /// Positive = credit, negative = debit.
    pub net_debit_credit: f64,
    /// Linear theta estimate.
    pub estimated_theta: f64,
    /// Current P&L.
    pub current_pnl: f64,
    /// Effective sale price now.
    pub effective_sale_current: f64,
    /// Effective sale price after rolling.
    pub effective_sale_after_roll: f64,
    /// Days added.
    pub additional_days: i64,
    /// New delta.
    #[serde(default)]
    pub new_delta: Option<f64>,
    /// Rent-rate benchmark.
    pub additional_premium_needed: f64,
}

impl TryFrom<RollDecisionDto> for RollDecisionInput {
    type Error = ValidationErrors;

    fn try_from(dto: RollDecisionDto) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();
        let mut metric = |field: &str, raw: f64| errors.signed(field, raw, MAX_METRIC);
        let net_debit_credit = metric("net_debit_credit", dto.net_debit_credit);
        let estimated_theta = metric("estimated_theta", dto.estimated_theta);
        let current_pnl = metric("current_pnl", dto.current_pnl);
        let effective_sale_current = metric("effective_sale_current", dto.effective_sale_current);
        let effective_sale_after_roll =
            metric("effective_sale_after_roll", dto.effective_sale_after_roll);
        let additional_premium_needed =
            metric("additional_premium_needed", dto.additional_premium_needed);
        let new_delta = dto.new_delta.and_then(|d| errors.fraction("new_delta", d));

        match (
            net_debit_credit,
            estimated_theta,
            current_pnl,
            effective_sale_current,
            effective_sale_after_roll,
            additional_premium_needed,
        ) {
            (Some(ndc), Some(theta), Some(pnl), Some(current), Some(after), Some(needed))
                if errors.is_empty() =>
            {
                Ok(Self {
                    net_debit_credit: ndc,
                    estimated_theta: theta,
                    current_pnl: pnl,
                    effective_sale_current: current,
                    effective_sale_after_roll: after,
                    additional_days: dto.additional_days,
                    new_delta,
                    additional_premium_needed: needed,
                })
            }
            _ => Err(errors),
        }
    }
}
