//! USD amounts stored on a position (fees) and rendered in reports.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dollar amount at full Decimal precision.
///
/// `Display` renders `$1,234.56`; rounding happens only there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// No dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wrap a dollar amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Unrounded amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Cents, half away from zero.
    #[must_use]
    pub fn round(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Render as whole dollars, e.g. `$1,235`.
    #[must_use]
    pub fn to_whole_dollars(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        render_usd(rounded, 0)
    }
}

/// `value` must already be rounded to `dp` places.
fn render_usd(value: Decimal, dp: usize) -> String {
    let digits = format!("{:.*}", dp, value.abs());
    let (whole, cents) = digits
        .split_once('.')
        .map_or((digits.as_str(), None), |(w, c)| (w, Some(c)));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < Decimal::ZERO { "-" } else { "" };
    cents.map_or_else(
        || format!("{sign}${grouped}"),
        |c| format!("{sign}${grouped}.{c}"),
    )
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_usd(self.round().0, 2))
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}
