//! Position enriched with every derived metric.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::pnl::position_pnl;
use super::premium::{
    annualized_yield, capital_at_risk, effective_sale_price, net_premium, return_on_capital,
    rent_per_day, total_premium,
};
use super::time::{days_to_expiration, holding_days};
use super::value::{extrinsic_buffer, moneyness};
use crate::domain::position::{BufferRisk, Moneyness, Position};

/// Stored record plus derived metrics, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedPosition {
    /// Stored record.
    #[serde(flatten)]
    pub position: Position,
    /// Days to expiration, floored at 0.
    pub dte: i64,
    /// Open-to-expiration window, at least 1.
    pub holding_days: i64,
    /// ITM / ATM / OTM.
    pub moneyness: Moneyness,
    /// Premium received before fees.
    pub total_premium: Decimal,
    /// Premium received after fees.
    pub net_premium: Decimal,
    /// Value of the covering shares.
    pub capital_at_risk: Decimal,
    /// Percent.
    pub return_on_capital: Decimal,
    /// Percent.
    pub annualized_yield: Decimal,
    /// Net premium per holding day.
    pub rent_per_day: Decimal,
    /// Per-share price realized if assigned.
    pub effective_sale_price: Decimal,
    /// Realized once closed, unrealized while open.
    pub pnl: Decimal,
    /// `None` once the position is closed.
    pub extrinsic_buffer: Option<Decimal>,
    /// Risk band of `extrinsic_buffer`.
    pub buffer_risk: BufferRisk,
}

/// Derive every metric of `position` as of `today`.
#[must_use]
pub fn enrich(position: &Position, today: NaiveDate) -> EnrichedPosition {
    let quantity = position.quantity();
    let fees = position.fees().amount();
    let holding = holding_days(position.open_date(), position.expiration_date());

    let total = total_premium(position.premium_per_contract(), quantity);
    let net = net_premium(position.premium_per_contract(), quantity, fees);
    let capital = capital_at_risk(position.stock_price(), quantity);
    let roc = return_on_capital(net, capital);

    let buffer = position.is_open().then(|| {
        extrinsic_buffer(
            position.current_option_price(),
            position.stock_price(),
            position.strike_price(),
        )
    });

    EnrichedPosition {
        position: position.clone(),
        dte: days_to_expiration(position.expiration_date(), today),
        holding_days: holding,
        moneyness: moneyness(position.stock_price(), position.strike_price()),
        total_premium: total,
        net_premium: net,
        capital_at_risk: capital,
        return_on_capital: roc,
        annualized_yield: annualized_yield(roc, holding),
        rent_per_day: rent_per_day(net, holding),
        effective_sale_price: effective_sale_price(
            position.strike_price(),
            position.premium_per_contract(),
            quantity,
            fees,
        ),
        pnl: position_pnl(position),
        extrinsic_buffer: buffer,
        buffer_risk: BufferRisk::classify(buffer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::position::aggregate::tests::{date, sample_new_position};
    use crate::domain::shared::{PositionId, Timestamp};
    use rust_decimal_macros::dec;

    fn open_position() -> Position {
        Position::open(PositionId::new("p1"), sample_new_position()).unwrap()
    }

    #[test]
    fn open_position_metrics() {
        let enriched = enrich(&open_position(), date(2025, 1, 16));
        assert_eq!(enriched.dte, 15);
        assert_eq!(enriched.holding_days, 30);
        assert_eq!(enriched.moneyness, Moneyness::Otm);
        assert_eq!(enriched.total_premium, dec!(500));
        assert_eq!(enriched.net_premium, dec!(498));
        assert_eq!(enriched.capital_at_risk, dec!(90000));
        assert_eq!(enriched.annualized_yield.round_dp(2), dec!(6.73));
        assert_eq!(enriched.pnl, dec!(198));
        assert_eq!(enriched.extrinsic_buffer, Some(dec!(11.50)));
        assert_eq!(enriched.buffer_risk, BufferRisk::Comfortable);
    }

    #[test]
    fn closed_position_suppresses_buffer() {
        let mut position = open_position();
        position
            .close(dec!(0.40), Timestamp::parse("2025-01-20T15:30:00Z").unwrap())
            .unwrap();
        let enriched = enrich(&position, date(2025, 1, 20));
        assert_eq!(enriched.extrinsic_buffer, None);
        assert_eq!(enriched.buffer_risk, BufferRisk::NotApplicable);
        assert_eq!(enriched.pnl, dec!(418));
    }

    #[test]
    fn enrichment_is_idempotent() {
        let position = open_position();
        let today = date(2025, 1, 10);
        assert_eq!(enrich(&position, today), enrich(&position, today));
    }

    #[test]
    fn serializes_stored_fields_flat() {
        let json = serde_json::to_value(enrich(&open_position(), date(2025, 1, 16))).unwrap();
        assert_eq!(json["ticker"], "SPY");
        assert_eq!(json["moneyness"], "OTM");
        assert_eq!(json["buffer_risk"], "COMFORTABLE");
        assert_eq!(json["dte"], 15);
    }
}
