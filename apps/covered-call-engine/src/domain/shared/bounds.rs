//! Accepted magnitudes for prices, fees and contract counts.
//!
//! Metrics multiply these together (price * contracts * 100, net / capital *
//! 365); inputs inside these bounds keep every product inside Decimal's range.

use rust_decimal::Decimal;

use super::DomainError;

/// Largest per-share price: strike, stock, premium, option marks.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Smallest non-zero stock or strike price (0.0001).
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// Largest flat fee on one position.
pub const MAX_FEES: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Most contracts on one position.
pub const MAX_QUANTITY: u32 = 1_000_000;

/// Largest magnitude of a derived dollar figure (P&L, credit, benchmark)
/// accepted as roll scoring input: 10^24.
pub const MAX_METRIC: Decimal = Decimal::from_parts(2_701_131_776, 466_537_709, 54_210, false, 0);

/// Strictly positive price in [`MIN_PRICE`, `MAX_PRICE`].
///
/// # Errors
///
/// Returns [`DomainError::InvalidValue`] naming `field`.
pub fn ensure_price(field: &str, value: Decimal) -> Result<(), DomainError> {
    if value <= Decimal::ZERO {
        return Err(DomainError::invalid_value(field, "must be greater than zero"));
    }
    if value < MIN_PRICE {
        return Err(DomainError::invalid_value(
            field,
            format!("must be at least {MIN_PRICE}"),
        ));
    }
    ensure_at_most(field, value, MAX_PRICE)
}

/// Zero-or-more amount no larger than `max`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidValue`] naming `field`.
pub fn ensure_amount(field: &str, value: Decimal, max: Decimal) -> Result<(), DomainError> {
    if value < Decimal::ZERO {
        return Err(DomainError::invalid_value(field, "cannot be negative"));
    }
    ensure_at_most(field, value, max)
}

/// Contract count in `1..=MAX_QUANTITY`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidValue`] for `quantity`.
pub fn ensure_quantity(quantity: u32) -> Result<(), DomainError> {
    if quantity == 0 {
        return Err(DomainError::invalid_value(
            "quantity",
            "must be at least 1 contract",
        ));
    }
    if quantity > MAX_QUANTITY {
        return Err(DomainError::invalid_value(
            "quantity",
            format!("must not exceed {MAX_QUANTITY} contracts"),
        ));
    }
    Ok(())
}

/// Signed figure with magnitude at most `max`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidValue`] naming `field`.
pub fn ensure_magnitude(field: &str, value: Decimal, max: Decimal) -> Result<(), DomainError> {
    ensure_at_most(field, value.abs(), max)
}

fn ensure_at_most(field: &str, value: Decimal, max: Decimal) -> Result<(), DomainError> {
    if value > max {
        return Err(DomainError::invalid_value(
            field,
            format!("must not exceed {max}"),
        ));
    }
    Ok(())
}
