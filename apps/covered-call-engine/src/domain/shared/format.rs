//! Fixed-point rendering of decimals for user-facing text.

use rust_decimal::{Decimal, RoundingStrategy};

/// Render `value` with exactly `dp` decimal places, rounding half away from zero.
#[must_use]
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    // -0.00 renders without the sign
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{:.*}", dp as usize, rounded)
}
