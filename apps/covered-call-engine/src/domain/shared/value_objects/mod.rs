//! Shared value objects.

mod clock;
mod identifiers;
mod money;
mod ticker;
mod timestamp;

pub use clock::{Clock, FixedClock, SystemClock};
pub use identifiers::PositionId;
pub use money::Money;
pub use ticker::Ticker;
pub use timestamp::Timestamp;
