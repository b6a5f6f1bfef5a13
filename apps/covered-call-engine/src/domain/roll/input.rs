//! Scoring inputs for the roll recommendation engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived roll values consumed by [`super::analyze_roll_decision`].
///
/// Dollar amounts (`net_debit_credit`, `additional_premium_needed`,
/// `current_pnl`) are position totals. `estimated_theta` stays on the
/// per-share scale of the option price it was derived from and is compared
/// against `net_debit_credit` as-is. Effective sale prices are per share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollDecisionInput {
    /// Positive = credit received, negative = debit paid.
    pub net_debit_credit: Decimal,
    /// Linear theta estimate for the extra days.
    pub estimated_theta: Decimal,
    /// Current P&L of the position being rolled.
    pub current_pnl: Decimal,
    /// Effective sale price if assigned on the current call.
    pub effective_sale_current: Decimal,
    /// Effective sale price if assigned after the roll.
    pub effective_sale_after_roll: Decimal,
    /// Days added by the roll.
    pub additional_days: i64,
    /// Delta of the new call, if known.
    pub new_delta: Option<Decimal>,
    /// Rent-rate benchmark for the extra days.
    pub additional_premium_needed: Decimal,
}
