//! Premium, capital and yield formulas.
//!
//! All amounts are position totals unless the name says per share.

use rust_decimal::Decimal;

use super::constants::{DAYS_PER_YEAR, HUNDRED, shares};

/// `premium_per_contract * quantity * 100`.
#[must_use]
pub fn total_premium(premium_per_contract: Decimal, quantity: u32) -> Decimal {
    premium_per_contract * shares(quantity)
}

/// Total premium less fees.
#[must_use]
pub fn net_premium(premium_per_contract: Decimal, quantity: u32, fees: Decimal) -> Decimal {
    total_premium(premium_per_contract, quantity) - fees
}

/// Value of the shares covering the calls.
#[must_use]
pub fn capital_at_risk(stock_price: Decimal, quantity: u32) -> Decimal {
    stock_price * shares(quantity)
}

/// Net premium as a percentage of capital; 0 when there is no capital.
#[must_use]
pub fn return_on_capital(net_premium: Decimal, capital_at_risk: Decimal) -> Decimal {
    if capital_at_risk.is_zero() {
        return Decimal::ZERO;
    }
    net_premium / capital_at_risk * HUNDRED
}

/// Static annualization of `return_on_capital` over the holding window.
#[must_use]
pub fn annualized_yield(return_on_capital: Decimal, holding_days: i64) -> Decimal {
    return_on_capital / Decimal::from(holding_days.max(1)) * DAYS_PER_YEAR
}

/// Net premium earned per day of the holding window.
#[must_use]
pub fn rent_per_day(net_premium: Decimal, holding_days: i64) -> Decimal {
    net_premium / Decimal::from(holding_days.max(1))
}

/// Per-share price realized if assigned: strike plus net premium per share.
#[must_use]
pub fn effective_sale_price(
    strike: Decimal,
    premium_per_contract: Decimal,
    quantity: u32,
    fees: Decimal,
) -> Decimal {
    strike + net_premium(premium_per_contract, quantity, fees) / shares(quantity)
}
