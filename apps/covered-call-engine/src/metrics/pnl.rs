//! Profit and loss.

use rust_decimal::Decimal;

use super::constants::shares;
use super::premium::net_premium;
use crate::domain::position::Position;

/// Net premium less the cost to buy the calls back at `option_price`.
#[must_use]
pub fn unrealized_pnl(net_premium: Decimal, option_price: Decimal, quantity: u32) -> Decimal {
    net_premium - option_price * shares(quantity)
}

/// Net premium less what was paid to close.
#[must_use]
pub fn realized_pnl(net_premium: Decimal, close_price: Decimal, quantity: u32) -> Decimal {
    net_premium - close_price * shares(quantity)
}

/// Realized P&L once closed, unrealized P&L while open.
#[must_use]
pub fn position_pnl(position: &Position) -> Decimal {
    let net = net_premium(
        position.premium_per_contract(),
        position.quantity(),
        position.fees().amount(),
    );
    if position.is_open() {
        unrealized_pnl(net, position.current_option_price(), position.quantity())
    } else {
        realized_pnl(
            net,
            position.close_price().unwrap_or_default(),
            position.quantity(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::position::aggregate::tests::sample_new_position;
    use crate::domain::shared::{PositionId, Timestamp};
    use rust_decimal_macros::dec;

    #[test]
    fn open_position_uses_current_mark() {
        let position = Position::open(PositionId::new("p1"), sample_new_position()).unwrap();
        assert_eq!(position_pnl(&position), dec!(198));
    }

    #[test]
    fn closed_position_uses_close_price() {
        let mut position = Position::open(PositionId::new("p1"), sample_new_position()).unwrap();
        position
            .close(dec!(0.25), Timestamp::parse("2025-01-25T20:00:00Z").unwrap())
            .unwrap();
        assert_eq!(position_pnl(&position), dec!(448));
    }

    #[test]
    fn buying_back_above_premium_is_a_loss() {
        assert_eq!(unrealized_pnl(dec!(498), dec!(4.00), 2), dec!(-302));
        assert_eq!(realized_pnl(dec!(498), dec!(2.49), 2), dec!(0));
    }
}
