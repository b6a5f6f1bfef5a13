//! Portfolio-level totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::enriched::EnrichedPosition;

/// Aggregate figures over a set of enriched positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioSummary {
    /// Reference date of the figures.
    pub as_of: Option<NaiveDate>,
    /// Number of open positions.
    pub open_positions: usize,
    /// Number of closed positions.
    pub closed_positions: usize,
    /// Net premium over all positions, open and closed.
    pub total_net_premium: Decimal,
    /// Realized plus unrealized P&L.
    pub total_pnl: Decimal,
    /// P&L of open positions.
    pub unrealized_pnl: Decimal,
    /// P&L of closed positions.
    pub realized_pnl: Decimal,
    /// Open positions only.
    pub capital_at_risk: Decimal,
    /// Mean annualized yield of open positions; 0 with none open.
    pub average_annualized_yield: Decimal,
}

impl PortfolioSummary {
    /// Summarize `positions` as of `today`.
    #[must_use]
    pub fn from_positions(positions: &[EnrichedPosition], today: NaiveDate) -> Self {
        let mut summary = Self {
            as_of: Some(today),
            ..Self::default()
        };
        let mut yield_sum = Decimal::ZERO;

        for p in positions {
            summary.total_net_premium += p.net_premium;
            summary.total_pnl += p.pnl;
            if p.position.is_open() {
                summary.open_positions += 1;
                summary.unrealized_pnl += p.pnl;
                summary.capital_at_risk += p.capital_at_risk;
                yield_sum += p.annualized_yield;
            } else {
                summary.closed_positions += 1;
                summary.realized_pnl += p.pnl;
            }
        }

        if summary.open_positions > 0 {
            summary.average_annualized_yield = yield_sum / Decimal::from(summary.open_positions);
        }
        summary
    }
}
