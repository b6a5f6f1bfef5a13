//! Decimal constants for position metric calculations.

use rust_decimal::Decimal;

/// Shares per option contract.
pub const SHARES_PER_CONTRACT: Decimal = Decimal::ONE_HUNDRED;
/// Percent scale.
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
/// Annualization basis.
pub const DAYS_PER_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);
/// Half-width of the at-the-money band, as a fraction of the strike.
pub const ATM_BAND: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01

/// Shares covered by `quantity` contracts.
#[must_use]
pub fn shares(quantity: u32) -> Decimal {
    Decimal::from(quantity) * SHARES_PER_CONTRACT
}
