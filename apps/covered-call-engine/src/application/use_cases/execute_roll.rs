//! Execute Roll Use Case
//!
//! Closes the current call at the estimated close cost and prepares the new
//! leg. The caller persists the two records as separate operations; nothing
//! here touches storage.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::application::error::ApplicationError;
use crate::domain::position::{NewPosition, Position};
use crate::domain::roll::RollProposal;
use crate::domain::shared::Clock;

/// Both sides of an executed roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    /// The old position, now closed.
    pub closed: Position,
    /// Fields of the new position to open.
    pub opened: NewPosition,
}

/// Use case for executing a roll.
pub struct ExecuteRollUseCase<C>
where
    C: Clock,
{
    clock: Arc<C>,
}

impl<C> ExecuteRollUseCase<C>
where
    C: Clock,
{
    /// Create a new `ExecuteRollUseCase`.
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Close `position` and build the new leg from `proposal`.
    ///
    /// # Errors
    ///
    /// Returns error if the position is closed or the proposal is invalid.
    pub fn execute(
        &self,
        position: &Position,
        proposal: &RollProposal,
    ) -> Result<RollOutcome, ApplicationError> {
        position.ensure_open()?;
        proposal
            .validate_against(position)
            .map_err(|errors| ApplicationError::Validation(errors.into()))?;

        let today = self.clock.today();
        let opened = NewPosition {
            account: position.account().to_string(),
            ticker: position.ticker().clone(),
            option_ticker: None,
            strike_price: proposal.new_strike_price,
            stock_price: position.stock_price(),
            quantity: position.quantity(),
            open_date: today,
            expiration_date: proposal.new_expiration_date,
            premium_per_contract: proposal.new_premium_per_contract,
            fees: position.fees(),
            // marked at the premium just received
            current_option_price: proposal.new_premium_per_contract,
        };
        opened.validate().map_err(|err| ApplicationError::Validation(err.into()))?;

        let mut closed = position.clone();
        closed.close(proposal.estimated_close_cost, self.clock.now())?;

        info!(
            position_id = %closed.id(),
            close_price = %proposal.estimated_close_cost,
            new_strike = %opened.strike_price,
            new_expiration = %opened.expiration_date,
            "Roll executed"
        );

        Ok(RollOutcome { closed, opened })
    }
}
