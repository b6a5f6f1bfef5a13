//! Metrics Calculator
//!
//! Pure formulas over a position's stored fields and a reference date:
//! - days to expiration and holding window
//! - moneyness, intrinsic/extrinsic value, extrinsic buffer
//! - premium, capital, return on capital, annualized yield, rent per day
//! - realized and unrealized P&L
//! - roll economics feeding the recommendation engine
//!
//! Nothing here reads the system clock; "today" is always a parameter.

mod constants;
mod enriched;
mod format;
mod pnl;
mod premium;
mod roll;
mod summary;
mod time;
mod value;

pub use constants::{SHARES_PER_CONTRACT, shares};
pub use enriched::{EnrichedPosition, enrich};
pub use format::{format_currency, format_currency_whole, format_fixed, format_percent};
pub use pnl::{position_pnl, realized_pnl, unrealized_pnl};
pub use premium::{
    annualized_yield, capital_at_risk, effective_sale_price, net_premium, rent_per_day,
    return_on_capital, total_premium,
};
pub use roll::{
    RollMetrics, additional_premium_needed, effective_sale_price_after_roll, estimated_theta_decay,
    roll_break_even, roll_net_debit_credit,
};
pub use summary::PortfolioSummary;
pub use time::{days_to_expiration, holding_days};
pub use value::{extrinsic_buffer, extrinsic_value, intrinsic_value, moneyness};
