//! Derived values for a prospective roll.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::constants::shares;
use super::pnl::position_pnl;
use super::premium::{effective_sale_price, net_premium, rent_per_day};
use super::time::{days_to_expiration, holding_days};
use super::value::extrinsic_value;
use crate::domain::position::Position;
use crate::domain::roll::{RollDecisionInput, RollProposal};

/// Credit (positive) or debit (negative) of closing the current call and
/// selling the new one, after fees.
#[must_use]
pub fn roll_net_debit_credit(
    close_cost: Decimal,
    new_premium_per_contract: Decimal,
    quantity: u32,
    fees: Decimal,
) -> Decimal {
    new_premium_per_contract * shares(quantity) - close_cost * shares(quantity) - fees
}

/// New strike adjusted by the roll credit per share.
#[must_use]
pub fn roll_break_even(new_strike: Decimal, net_debit_credit: Decimal, quantity: u32) -> Decimal {
    new_strike + net_debit_credit / shares(quantity)
}

/// Per-share sale price if assigned on the new call, counting both the
/// original net premium and the roll credit.
#[must_use]
pub fn effective_sale_price_after_roll(
    new_strike: Decimal,
    original_net_premium: Decimal,
    net_debit_credit: Decimal,
    quantity: u32,
) -> Decimal {
    new_strike + (original_net_premium + net_debit_credit) / shares(quantity)
}

/// Linear time-decay estimate for the extra days bought by a roll.
///
/// Stays on the scale of `current_extrinsic` (per share). Returns 0 when the
/// current call has no days left.
#[must_use]
pub fn estimated_theta_decay(current_extrinsic: Decimal, current_dte: i64, new_dte: i64) -> Decimal {
    if current_dte <= 0 {
        return Decimal::ZERO;
    }
    let daily = current_extrinsic / Decimal::from(current_dte);
    daily * Decimal::from(new_dte - current_dte)
}

/// Premium the extra days would earn at the current rent rate.
#[must_use]
pub fn additional_premium_needed(current_rent_per_day: Decimal, additional_days: i64) -> Decimal {
    current_rent_per_day * Decimal::from(additional_days)
}

/// Every value shown for a roll and fed to the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollMetrics {
    /// Days left on the current call.
    pub current_dte: i64,
    /// Days to the new expiration.
    pub new_dte: i64,
    /// Days added by the roll.
    pub additional_days: i64,
    /// Positive = credit received, negative = debit paid.
    pub net_debit_credit: Decimal,
    /// New strike adjusted by the roll credit per share.
    pub break_even: Decimal,
    /// Effective sale price if assigned on the current call.
    pub effective_sale_current: Decimal,
    /// Effective sale price if assigned after the roll.
    pub effective_sale_after_roll: Decimal,
    /// Extrinsic value of the current call, per share.
    pub current_extrinsic: Decimal,
    /// Linear theta estimate for the extra days, per share.
    pub estimated_theta: Decimal,
    /// Net premium per day of the current holding window.
    pub current_rent_per_day: Decimal,
    /// Rent-rate benchmark for the extra days.
    pub additional_premium_needed: Decimal,
    /// Unrealized P&L of the current call.
    pub current_pnl: Decimal,
    /// Delta of the new call, if known.
    pub new_delta: Option<Decimal>,
}

impl RollMetrics {
    /// Compute the bundle for rolling `position` into `proposal` as of `today`.
    ///
    /// Roll fees are taken to equal the position's recorded fees.
    #[must_use]
    pub fn compute(position: &Position, proposal: &RollProposal, today: NaiveDate) -> Self {
        let quantity = position.quantity();
        let fees = position.fees().amount();

        let current_dte = days_to_expiration(position.expiration_date(), today);
        let new_dte = days_to_expiration(proposal.new_expiration_date, today);
        let additional_days = new_dte - current_dte;

        let net_debit_credit = roll_net_debit_credit(
            proposal.estimated_close_cost,
            proposal.new_premium_per_contract,
            quantity,
            fees,
        );
        let original_net = net_premium(position.premium_per_contract(), quantity, fees);

        let current_extrinsic = extrinsic_value(
            position.current_option_price(),
            position.stock_price(),
            position.strike_price(),
        );
        let current_rent_per_day = rent_per_day(
            original_net,
            holding_days(position.open_date(), position.expiration_date()),
        );

        Self {
            current_dte,
            new_dte,
            additional_days,
            net_debit_credit,
            break_even: roll_break_even(proposal.new_strike_price, net_debit_credit, quantity),
            effective_sale_current: effective_sale_price(
                position.strike_price(),
                position.premium_per_contract(),
                quantity,
                fees,
            ),
            effective_sale_after_roll: effective_sale_price_after_roll(
                proposal.new_strike_price,
                original_net,
                net_debit_credit,
                quantity,
            ),
            current_extrinsic,
            estimated_theta: estimated_theta_decay(current_extrinsic, current_dte, new_dte),
            current_rent_per_day,
            additional_premium_needed: additional_premium_needed(
                current_rent_per_day,
                additional_days,
            ),
            current_pnl: position_pnl(position),
            new_delta: proposal.new_delta,
        }
    }

    /// Inputs for [`crate::domain::roll::analyze_roll_decision`].
    #[must_use]
    pub fn decision_input(&self) -> RollDecisionInput {
        RollDecisionInput {
            net_debit_credit: self.net_debit_credit,
            estimated_theta: self.estimated_theta,
            current_pnl: self.current_pnl,
            effective_sale_current: self.effective_sale_current,
            effective_sale_after_roll: self.effective_sale_after_roll,
            additional_days: self.additional_days,
            new_delta: self.new_delta,
            additional_premium_needed: self.additional_premium_needed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::position::aggregate::tests::{date, sample_new_position};
    use crate::domain::shared::PositionId;
    use rust_decimal_macros::dec;

    fn proposal() -> RollProposal {
        RollProposal {
            new_expiration_date: date(2025, 3, 2),
            new_strike_price: dec!(460),
            estimated_close_cost: dec!(1.50),
            new_premium_per_contract: dec!(3.20),
            new_delta: Some(dec!(0.25)),
        }
    }

    #[test]
    fn documented_roll_scenario() {
        let position = Position::open(PositionId::new("p1"), sample_new_position()).unwrap();
        let metrics = RollMetrics::compute(&position, &proposal(), date(2025, 1, 16));

        assert_eq!(metrics.current_dte, 15);
        assert_eq!(metrics.new_dte, 45);
        assert_eq!(metrics.additional_days, 30);
        assert_eq!(metrics.net_debit_credit, dec!(338));
        assert_eq!(metrics.current_extrinsic, dec!(1.50));
        assert_eq!(metrics.estimated_theta, dec!(3.00));
        assert_eq!(metrics.current_rent_per_day, dec!(16.6));
        assert_eq!(metrics.additional_premium_needed, dec!(498));
        assert_eq!(metrics.break_even, dec!(461.69));
        assert_eq!(metrics.effective_sale_current, dec!(462.49));
        assert_eq!(metrics.effective_sale_after_roll, dec!(464.18));
        assert_eq!(metrics.current_pnl, dec!(198));
        assert_eq!(metrics.new_delta, Some(dec!(0.25)));
    }

    #[test]
    fn theta_is_zero_at_expiration() {
        assert_eq!(estimated_theta_decay(dec!(2), 0, 30), Decimal::ZERO);
        assert_eq!(estimated_theta_decay(dec!(2.00), 10, 30), dec!(4.00));
    }

    #[test]
    fn debit_roll_is_negative() {
        assert_eq!(roll_net_debit_credit(dec!(5), dec!(3), 1, dec!(1)), dec!(-201));
    }

    #[test]
    fn decision_input_carries_metrics() {
        let position = Position::open(PositionId::new("p1"), sample_new_position()).unwrap();
        let metrics = RollMetrics::compute(&position, &proposal(), date(2025, 1, 16));
        let input = metrics.decision_input();
        assert_eq!(input.net_debit_credit, metrics.net_debit_credit);
        assert_eq!(input.additional_days, 30);
        assert_eq!(input.additional_premium_needed, dec!(498));
    }
}
