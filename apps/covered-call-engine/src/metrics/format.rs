//! Display formatting for metrics.

use rust_decimal::Decimal;

use crate::domain::shared::Money;
pub use crate::domain::shared::format_fixed;

/// Format as `$1,234.56` / `-$12.50`.
#[must_use]
pub fn format_currency(value: Decimal) -> String {
    Money::new(value).to_string()
}

/// Format as whole dollars, `$1,235`.
#[must_use]
pub fn format_currency_whole(value: Decimal) -> String {
    Money::new(value).to_whole_dollars()
}

/// Format a percentage value (already scaled by 100) as `6.73%`.
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_fixed(value, 2))
}
