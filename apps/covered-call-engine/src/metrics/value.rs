//! Moneyness and option value decomposition (calls only, per share).

use rust_decimal::Decimal;

use super::constants::ATM_BAND;
use crate::domain::position::Moneyness;

/// ATM within 1% of the strike (inclusive), ITM above it, OTM below.
#[must_use]
pub fn moneyness(stock_price: Decimal, strike: Decimal) -> Moneyness {
    let diff = stock_price - strike;
    if diff.abs() <= ATM_BAND * strike {
        Moneyness::Atm
    } else if stock_price > strike {
        Moneyness::Itm
    } else {
        Moneyness::Otm
    }
}

/// `max(0, stock - strike)`.
#[must_use]
pub fn intrinsic_value(stock_price: Decimal, strike: Decimal) -> Decimal {
    (stock_price - strike).max(Decimal::ZERO)
}

/// `max(0, option - intrinsic)`.
#[must_use]
pub fn extrinsic_value(option_price: Decimal, stock_price: Decimal, strike: Decimal) -> Decimal {
    (option_price - intrinsic_value(stock_price, strike)).max(Decimal::ZERO)
}

/// `option - (stock - strike)`, signed.
///
/// Unlike [`extrinsic_value`] this is not clamped: a negative buffer means
/// the call already trades below parity.
#[must_use]
pub fn extrinsic_buffer(option_price: Decimal, stock_price: Decimal, strike: Decimal) -> Decimal {
    option_price - (stock_price - strike)
}
