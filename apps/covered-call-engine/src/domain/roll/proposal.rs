//! Roll proposal for the new call leg.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::position::Position;
use crate::domain::shared::DomainError;
use crate::domain::shared::bounds::{MAX_PRICE, ensure_amount, ensure_price};

/// Terms of a prospective roll. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollProposal {
    /// Expiration of the new call; strictly after the current expiration.
    pub new_expiration_date: NaiveDate,
    /// Strike of the new call.
    pub new_strike_price: Decimal,
    /// Per-share price to buy back the current call.
    pub estimated_close_cost: Decimal,
    /// Per-share premium of the new call.
    pub new_premium_per_contract: Decimal,
    /// Delta of the new call, in [0, 1], if known.
    #[serde(default)]
    pub new_delta: Option<Decimal>,
}

impl RollProposal {
    /// Check the proposal against the position being rolled.
    ///
    /// # Errors
    ///
    /// Returns every violated rule, one per field.
    pub fn validate_against(&self, position: &Position) -> Result<(), Vec<DomainError>> {
        let mut errors = Vec::new();

        if self.new_expiration_date <= position.expiration_date() {
            errors.push(DomainError::invalid_value(
                "new_expiration_date",
                format!(
                    "must be after the current expiration {}",
                    position.expiration_date()
                ),
            ));
        }
        errors.extend(
            [
                ensure_price("new_strike_price", self.new_strike_price),
                ensure_amount("estimated_close_cost", self.estimated_close_cost, MAX_PRICE),
                ensure_amount(
                    "new_premium_per_contract",
                    self.new_premium_per_contract,
                    MAX_PRICE,
                ),
            ]
            .into_iter()
            .filter_map(Result::err),
        );
        if let Some(delta) = self.new_delta
            && !(Decimal::ZERO..=Decimal::ONE).contains(&delta)
        {
            errors.push(DomainError::invalid_value(
                "new_delta",
                "must be between 0 and 1",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
