//! Position form DTO

use serde::{Deserialize, Serialize};

use crate::application::validation::ValidationErrors;
use crate::domain::position::NewPosition;
use crate::domain::shared::bounds::{MAX_FEES, MAX_PRICE, ensure_quantity};
use crate::domain::shared::{Money, Ticker};

/// Position fields as submitted, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionForm {
    /// Account label.
    pub account: String,
    /// Underlying ticker.
    pub ticker: String,
    /// Option symbol, generated when blank.
    #[serde(default)]
    pub option_ticker: Option<String>,
    /// Strike.
    pub strike_price: f64,
    /// Underlying price.
    pub stock_price: f64,
    /// Contracts.
    pub quantity: i64,
    /// ISO date.
    pub open_date: String,
    /// ISO date.
    pub expiration_date: String,
    /// Premium per share of each contract.
    pub premium_per_contract: f64,
    /// Fees; 0 when absent.
    #[serde(default)]
    pub fees: Option<f64>,
    /// Option mark; 0 when absent.
    #[serde(default)]
    pub current_option_price: Option<f64>,
}

impl PositionForm {
    /// Convert to a validated [`NewPosition`].
    ///
    /// # Errors
    ///
    /// Returns every rejected field. Cross-field rules (date order) are only
    /// checked once each field parses.
    pub fn to_new_position(&self) -> Result<NewPosition, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.account.trim().is_empty() {
            errors.push("account", "Account is required");
        }
        let ticker = Ticker::new(self.ticker.as_str());
        if let Err(err) = ticker.validate() {
            errors.record(err);
        }
        let quantity = match u32::try_from(self.quantity) {
            Ok(q) => match ensure_quantity(q) {
                Ok(()) => Some(q),
                Err(err) => {
                    errors.record(err);
                    None
                }
            },
            Err(_) if self.quantity > 0 => {
                errors.push("quantity", "is out of range");
                None
            }
            Err(_) => {
                errors.push("quantity", "must be at least 1 contract");
                None
            }
        };
        let strike_price = errors.price("strike_price", self.strike_price);
        let stock_price = errors.price("stock_price", self.stock_price);
        let premium = errors.amount("premium_per_contract", self.premium_per_contract, MAX_PRICE);
        let fees = errors.amount("fees", self.fees.unwrap_or_default(), MAX_FEES);
        let current_option_price = errors.amount(
            "current_option_price",
            self.current_option_price.unwrap_or_default(),
            MAX_PRICE,
        );
        let open_date = errors.date("open_date", &self.open_date);
        let expiration_date = errors.date("expiration_date", &self.expiration_date);

        let (
            Some(quantity),
            Some(strike_price),
            Some(stock_price),
            Some(premium_per_contract),
            Some(fees),
            Some(current_option_price),
            Some(open_date),
            Some(expiration_date),
        ) = (
            quantity,
            strike_price,
            stock_price,
            premium,
            fees,
            current_option_price,
            open_date,
            expiration_date,
        )
        else {
            return Err(errors);
        };

        if expiration_date <= open_date {
            errors.push("expiration_date", "Expiration date must be after open date");
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let new = NewPosition {
            account: self.account.trim().to_string(),
            ticker,
            option_ticker: self.option_ticker.clone(),
            strike_price,
            stock_price,
            quantity,
            open_date,
            expiration_date,
            premium_per_contract,
            fees: Money::new(fees),
            current_option_price,
        };
        new.validate()?;
        Ok(new)
    }
}
