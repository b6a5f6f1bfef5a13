//! Position value objects: lifecycle status, moneyness and buffer risk bands.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionStatus {
    /// Call is still outstanding.
    #[default]
    Open,
    /// Call was bought back, expired or assigned.
    Closed,
}

impl PositionStatus {
    /// Check if the status is `Open`.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}

/// Moneyness of a short call relative to the underlying price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Moneyness {
    /// Stock above strike (outside the ATM band).
    Itm,
    /// Stock within 1% of strike.
    Atm,
    /// Stock below strike (outside the ATM band).
    Otm,
}

impl fmt::Display for Moneyness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Itm => write!(f, "ITM"),
            Self::Atm => write!(f, "ATM"),
            Self::Otm => write!(f, "OTM"),
        }
    }
}

/// Risk band of the extrinsic buffer on an open position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BufferRisk {
    /// Buffer below $0.50.
    High,
    /// Buffer in [$0.50, $2.00).
    Moderate,
    /// Buffer in [$2.00, $5.00).
    Adequate,
    /// Buffer of $5.00 or more; no flag.
    Comfortable,
    /// Position is closed; the buffer is not meaningful.
    NotApplicable,
}

impl BufferRisk {
    /// Upper bound (exclusive) of the high-risk band.
    pub const HIGH_BELOW: Decimal = dec!(0.50);
    /// Upper bound (exclusive) of the moderate band.
    pub const MODERATE_BELOW: Decimal = dec!(2.00);
    /// Upper bound (exclusive) of the adequate band.
    pub const ADEQUATE_BELOW: Decimal = dec!(5.00);

    /// Classify an extrinsic buffer; `None` means the position is closed.
    #[must_use]
    pub fn classify(buffer: Option<Decimal>) -> Self {
        match buffer {
            None => Self::NotApplicable,
            Some(b) if b < Self::HIGH_BELOW => Self::High,
            Some(b) if b < Self::MODERATE_BELOW => Self::Moderate,
            Some(b) if b < Self::ADEQUATE_BELOW => Self::Adequate,
            Some(_) => Self::Comfortable,
        }
    }

    /// Whether the band should be flagged to the user.
    #[must_use]
    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::High | Self::Moderate | Self::Adequate)
    }
}
