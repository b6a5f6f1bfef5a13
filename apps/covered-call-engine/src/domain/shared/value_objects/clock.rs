//! Reference clock for "today".
//!
//! Days-to-expiration and every metric derived from it depend on the current
//! calendar date. The date is always supplied through a [`Clock`] so that
//! calculations stay deterministic under test.

use chrono::{Local, NaiveDate};

use super::Timestamp;

/// Source of the current date and time.
pub trait Clock: Send + Sync {
    /// Current calendar date (time-of-day stripped).
    fn today(&self) -> NaiveDate;

    /// Current instant.
    fn now(&self) -> Timestamp;
}

/// Clock backed by the host's local calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock pinned to a single date. `now()` is midnight UTC of that date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    /// Create a clock that always reports `today`.
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now(&self) -> Timestamp {
        Timestamp::start_of_day(self.today)
    }
}
