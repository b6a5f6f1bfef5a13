//! Position Aggregate
//!
//! Stored fields of a covered-call position. Every derived value (DTE,
//! premium totals, yield, P&L, buffer) is recomputed by the metrics layer on
//! read and never kept on the record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::PositionError;
use super::value_objects::PositionStatus;
use crate::domain::shared::bounds::{
    MAX_FEES, MAX_PRICE, ensure_amount, ensure_price, ensure_quantity,
};
use crate::domain::shared::{DomainError, Money, PositionId, Ticker, Timestamp};

/// Fields supplied when opening or amending a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPosition {
    /// Brokerage account label.
    pub account: String,
    /// Underlying ticker.
    pub ticker: Ticker,
    /// Option symbol; generated from ticker/expiration/strike when absent.
    #[serde(default)]
    pub option_ticker: Option<String>,
    /// Call strike (per share).
    pub strike_price: Decimal,
    /// Underlying price, initially the price at open.
    pub stock_price: Decimal,
    /// Number of contracts (100 shares each).
    pub quantity: u32,
    /// Date the call was sold.
    pub open_date: NaiveDate,
    /// Expiration date of the call.
    pub expiration_date: NaiveDate,
    /// Premium received per share of each contract.
    pub premium_per_contract: Decimal,
    /// Flat transaction cost.
    #[serde(default)]
    pub fees: Money,
    /// Latest option mark (0 if unknown).
    #[serde(default)]
    pub current_option_price: Decimal,
}

impl NewPosition {
    /// Check every field and cross-field invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.account.trim().is_empty() {
            return Err(DomainError::invalid_value("account", "Account is required"));
        }
        self.ticker.validate()?;
        ensure_price("strike_price", self.strike_price)?;
        ensure_price("stock_price", self.stock_price)?;
        ensure_quantity(self.quantity)?;
        ensure_amount("premium_per_contract", self.premium_per_contract, MAX_PRICE)?;
        ensure_amount("fees", self.fees.amount(), MAX_FEES)?;
        ensure_amount("current_option_price", self.current_option_price, MAX_PRICE)?;
        if self.expiration_date <= self.open_date {
            return Err(DomainError::InvariantViolation {
                aggregate: "Position".to_string(),
                invariant: "expiration_date > open_date".to_string(),
                state: format!(
                    "open_date={}, expiration_date={}",
                    self.open_date, self.expiration_date
                ),
            });
        }
        Ok(())
    }

    fn resolved_option_ticker(&self) -> String {
        self.option_ticker
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map_or_else(
                || {
                    self.ticker
                        .call_option_symbol(self.expiration_date, self.strike_price)
                },
                str::to_uppercase,
            )
    }
}

/// A covered-call position record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    id: PositionId,
    account: String,
    ticker: Ticker,
    #[serde(default)]
    option_ticker: Option<String>,
    strike_price: Decimal,
    stock_price: Decimal,
    quantity: u32,
    open_date: NaiveDate,
    expiration_date: NaiveDate,
    premium_per_contract: Decimal,
    #[serde(default)]
    fees: Money,
    #[serde(default)]
    current_option_price: Decimal,
    #[serde(default)]
    status: PositionStatus,
    #[serde(default)]
    close_price: Option<Decimal>,
    #[serde(default)]
    closed_at: Option<Timestamp>,
}

impl Position {
    /// Open a new position.
    ///
    /// # Errors
    ///
    /// Returns error if any field of `new` is invalid.
    pub fn open(id: PositionId, new: NewPosition) -> Result<Self, PositionError> {
        new.validate()?;
        let option_ticker = Some(new.resolved_option_ticker());
        Ok(Self {
            id,
            account: new.account.trim().to_string(),
            ticker: new.ticker,
            option_ticker,
            strike_price: new.strike_price,
            stock_price: new.stock_price,
            quantity: new.quantity,
            open_date: new.open_date,
            expiration_date: new.expiration_date,
            premium_per_contract: new.premium_per_contract,
            fees: new.fees,
            current_option_price: new.current_option_price,
            status: PositionStatus::Open,
            close_price: None,
            closed_at: None,
        })
    }

    /// Replace the editable fields. Status and close data are kept.
    ///
    /// # Errors
    ///
    /// Returns error if any field of `edit` is invalid; the record is left
    /// unchanged in that case.
    pub fn amend(&mut self, edit: NewPosition) -> Result<(), PositionError> {
        edit.validate()?;
        self.option_ticker = Some(edit.resolved_option_ticker());
        self.account = edit.account.trim().to_string();
        self.ticker = edit.ticker;
        self.strike_price = edit.strike_price;
        self.stock_price = edit.stock_price;
        self.quantity = edit.quantity;
        self.open_date = edit.open_date;
        self.expiration_date = edit.expiration_date;
        self.premium_per_contract = edit.premium_per_contract;
        self.fees = edit.fees;
        self.current_option_price = edit.current_option_price;
        Ok(())
    }

    /// Refresh the underlying and option marks.
    ///
    /// # Errors
    ///
    /// Returns error if the position is closed or a price is invalid.
    pub fn update_marks(
        &mut self,
        stock_price: Decimal,
        option_price: Decimal,
    ) -> Result<(), PositionError> {
        self.ensure_open()?;
        ensure_price("stock_price", stock_price)?;
        ensure_amount("current_option_price", option_price, MAX_PRICE)?;
        self.stock_price = stock_price;
        self.current_option_price = option_price;
        Ok(())
    }

    /// Close the position at `close_price` per share.
    ///
    /// # Errors
    ///
    /// Returns error if the position is already closed or the price is negative.
    pub fn close(&mut self, close_price: Decimal, closed_at: Timestamp) -> Result<(), PositionError> {
        if self.status == PositionStatus::Closed {
            return Err(DomainError::InvalidStateTransition {
                entity: "Position".to_string(),
                from: self.status.to_string(),
                to: PositionStatus::Closed.to_string(),
                reason: format!("position {} is already closed", self.id),
            }
            .into());
        }
        ensure_amount("close_price", close_price, MAX_PRICE)?;
        self.status = PositionStatus::Closed;
        self.close_price = Some(close_price);
        self.closed_at = Some(closed_at);
        Ok(())
    }

    /// Verify a record loaded from storage or a backup.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), PositionError> {
        self.as_new_position().validate()?;
        match (self.status, self.close_price) {
            (PositionStatus::Closed, None) => Err(DomainError::InvariantViolation {
                aggregate: "Position".to_string(),
                invariant: "closed positions carry a close_price".to_string(),
                state: format!("id={}, status=Closed, close_price=None", self.id),
            }
            .into()),
            (PositionStatus::Open, Some(_)) => Err(DomainError::InvariantViolation {
                aggregate: "Position".to_string(),
                invariant: "open positions have no close_price".to_string(),
                state: format!("id={}, status=Open", self.id),
            }
            .into()),
            (_, Some(price)) => {
                ensure_amount("close_price", price, MAX_PRICE).map_err(PositionError::from)
            }
            (PositionStatus::Open, None) => Ok(()),
        }
    }

    /// Fail with [`PositionError::NotOpen`] unless the position is open.
    ///
    /// # Errors
    ///
    /// Returns error if the position is closed.
    pub fn ensure_open(&self) -> Result<(), PositionError> {
        if self.status.is_open() {
            Ok(())
        } else {
            Err(PositionError::NotOpen {
                position_id: self.id.to_string(),
            })
        }
    }

    /// Editable fields of this record.
    #[must_use]
    pub fn as_new_position(&self) -> NewPosition {
        NewPosition {
            account: self.account.clone(),
            ticker: self.ticker.clone(),
            option_ticker: self.option_ticker.clone(),
            strike_price: self.strike_price,
            stock_price: self.stock_price,
            quantity: self.quantity,
            open_date: self.open_date,
            expiration_date: self.expiration_date,
            premium_per_contract: self.premium_per_contract,
            fees: self.fees,
            current_option_price: self.current_option_price,
        }
    }

    /// Position ID.
    #[must_use]
    pub const fn id(&self) -> &PositionId {
        &self.id
    }

    /// Account label.
    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Underlying ticker.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Option symbol.
    #[must_use]
    pub fn option_ticker(&self) -> Option<&str> {
        self.option_ticker.as_deref()
    }

    /// Strike price.
    #[must_use]
    pub const fn strike_price(&self) -> Decimal {
        self.strike_price
    }

    /// Underlying price.
    #[must_use]
    pub const fn stock_price(&self) -> Decimal {
        self.stock_price
    }

    /// Number of contracts.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Open date.
    #[must_use]
    pub const fn open_date(&self) -> NaiveDate {
        self.open_date
    }

    /// Expiration date.
    #[must_use]
    pub const fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    /// Premium received per share of each contract.
    #[must_use]
    pub const fn premium_per_contract(&self) -> Decimal {
        self.premium_per_contract
    }

    /// Transaction fees.
    #[must_use]
    pub const fn fees(&self) -> Money {
        self.fees
    }

    /// Latest option mark.
    #[must_use]
    pub const fn current_option_price(&self) -> Decimal {
        self.current_option_price
    }

    /// Lifecycle status.
    #[must_use]
    pub const fn status(&self) -> PositionStatus {
        self.status
    }

    /// Check if the position is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Price paid to close, once closed.
    #[must_use]
    pub const fn close_price(&self) -> Option<Decimal> {
        self.close_price
    }

    /// Close timestamp, once closed.
    #[must_use]
    pub const fn closed_at(&self) -> Option<Timestamp> {
        self.closed_at
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::shared::bounds::MAX_QUANTITY;
    use rust_decimal_macros::dec;

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub(crate) fn sample_new_position() -> NewPosition {
        NewPosition {
            account: "IRA".to_string(),
            ticker: Ticker::new("spy"),
            option_ticker: None,
            strike_price: dec!(460),
            stock_price: dec!(450),
            quantity: 2,
            open_date: date(2025, 1, 1),
            expiration_date: date(2025, 1, 31),
            premium_per_contract: dec!(2.50),
            fees: Money::new(dec!(2)),
            current_option_price: dec!(1.50),
        }
    }

    #[test]
    fn open_starts_open_and_generates_option_ticker() {
        let position = Position::open(PositionId::new("p1"), sample_new_position()).unwrap();
        assert_eq!(position.status(), PositionStatus::Open);
        assert!(position.close_price().is_none());
        assert_eq!(position.option_ticker(), Some("SPY250131C00460000"));
        assert_eq!(position.ticker().as_str(), "SPY");
    }

    #[test]
    fn open_keeps_supplied_option_ticker() {
        let mut new = sample_new_position();
        new.option_ticker = Some("spy250131c00460000".to_string());
        let position = Position::open(PositionId::new("p1"), new).unwrap();
        assert_eq!(position.option_ticker(), Some("SPY250131C00460000"));
    }

    #[test]
    fn open_rejects_expiration_not_after_open() {
        let mut new = sample_new_position();
        new.expiration_date = new.open_date;
        let err = Position::open(PositionId::new("p1"), new).unwrap_err();
        assert!(err.to_string().contains("expiration_date > open_date"));
    }

    #[test]
    fn open_rejects_zero_quantity_and_negative_fees() {
        let mut new = sample_new_position();
        new.quantity = 0;
        assert!(Position::open(PositionId::new("p1"), new).is_err());

        let mut new = sample_new_position();
        new.fees = Money::new(dec!(-1));
        let err = Position::open(PositionId::new("p1"), new).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for 'fees': cannot be negative");
    }

    #[test]
    fn open_rejects_prices_beyond_ceiling() {
        let mut new = sample_new_position();
        new.strike_price = dec!(100000000000000000000000000);
        let err = Position::open(PositionId::new("p1"), new).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for 'strike_price': must not exceed 1000000"
        );

        let mut new = sample_new_position();
        new.quantity = MAX_QUANTITY + 1;
        assert!(Position::open(PositionId::new("p1"), new).is_err());
    }

    #[test]
    fn check_invariants_rejects_oversized_imported_record() {
        let json = r#"{
            "id": "p9", "account": "IRA", "ticker": "SPY",
            "strike_price": "460", "stock_price": "10000000000000000000000000",
            "quantity": 100000, "open_date": "2025-01-01",
            "expiration_date": "2025-01-31", "premium_per_contract": "2.5"
        }"#;
        let position: Position = serde_json::from_str(json).unwrap();
        let err = position.check_invariants().unwrap_err();
        assert!(err.to_string().contains("'stock_price'"));
    }

    #[test]
    fn close_and_marks_reject_runaway_prices() {
        let mut position = Position::open(PositionId::new("p1"), sample_new_position()).unwrap();
        assert!(position.update_marks(dec!(2000000), dec!(1)).is_err());
        assert!(position.update_marks(dec!(450), dec!(2000000)).is_err());
        let at = Timestamp::parse("2025-01-20T15:30:00Z").unwrap();
        assert!(position.close(dec!(2000000), at).is_err());
        assert!(position.is_open());
    }

    #[test]
    fn close_is_irreversible_and_happens_once() {
        let mut position = Position::open(PositionId::new("p1"), sample_new_position()).unwrap();
        let at = Timestamp::parse("2025-01-20T15:30:00Z").unwrap();
        position.close(dec!(0.40), at).unwrap();

        assert_eq!(position.status(), PositionStatus::Closed);
        assert_eq!(position.close_price(), Some(dec!(0.40)));
        assert_eq!(position.closed_at(), Some(at));

        let err = position.close(dec!(0.10), at).unwrap_err();
        assert!(matches!(
            err,
            PositionError::Domain(DomainError::InvalidStateTransition { .. })
        ));
        assert_eq!(position.close_price(), Some(dec!(0.40)));
    }

    #[test]
    fn update_marks_requires_open() {
        let mut position = Position::open(PositionId::new("p1"), sample_new_position()).unwrap();
        position.update_marks(dec!(455), dec!(2.10)).unwrap();
        assert_eq!(position.stock_price(), dec!(455));
        assert_eq!(position.current_option_price(), dec!(2.10));

        position
            .close(dec!(2.10), Timestamp::parse("2025-01-20T15:30:00Z").unwrap())
            .unwrap();
        let err = position.update_marks(dec!(456), dec!(2.00)).unwrap_err();
        assert!(matches!(err, PositionError::NotOpen { .. }));
    }

    #[test]
    fn amend_validates_before_mutating() {
        let mut position = Position::open(PositionId::new("p1"), sample_new_position()).unwrap();
        let mut edit = sample_new_position();
        edit.strike_price = dec!(-5);
        assert!(position.amend(edit).is_err());
        assert_eq!(position.strike_price(), dec!(460));

        let mut edit = sample_new_position();
        edit.strike_price = dec!(470);
        edit.option_ticker = None;
        position.amend(edit).unwrap();
        assert_eq!(position.strike_price(), dec!(470));
        assert_eq!(position.option_ticker(), Some("SPY250131C00470000"));
    }

    #[test]
    fn check_invariants_rejects_closed_without_price() {
        let json = r#"{
            "id": "p9", "account": "IRA", "ticker": "SPY",
            "strike_price": "460", "stock_price": "450", "quantity": 1,
            "open_date": "2025-01-01", "expiration_date": "2025-01-31",
            "premium_per_contract": "2.5", "status": "Closed"
        }"#;
        let position: Position = serde_json::from_str(json).unwrap();
        assert!(position.check_invariants().is_err());
    }

    #[test]
    fn serde_defaults_optional_fields() {
        let json = r#"{
            "id": "p9", "account": "IRA", "ticker": "SPY",
            "strike_price": 460, "stock_price": 450.25, "quantity": 1,
            "open_date": "2025-01-01", "expiration_date": "2025-01-31",
            "premium_per_contract": 2.5
        }"#;
        let position: Position = serde_json::from_str(json).unwrap();
        assert_eq!(position.status(), PositionStatus::Open);
        assert_eq!(position.fees(), Money::ZERO);
        assert_eq!(position.current_option_price(), Decimal::ZERO);
        assert_eq!(position.stock_price(), dec!(450.25));
        assert!(position.check_invariants().is_ok());
    }
}
