//! Calendar-day counts.

use chrono::NaiveDate;

/// Whole calendar days from `today` to `expiration`, floored at 0.
///
/// A position past expiration with stale data counts as 0 DTE.
#[must_use]
pub fn days_to_expiration(expiration: NaiveDate, today: NaiveDate) -> i64 {
    (expiration - today).num_days().max(0)
}

/// Full open-to-expiration window in days, at least 1.
#[must_use]
pub fn holding_days(open_date: NaiveDate, expiration: NaiveDate) -> i64 {
    (expiration - open_date).num_days().max(1)
}
