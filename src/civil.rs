//! Civil-day anchoring in the fixed reference timezone.
//!
//! Every "what day is it" decision in this crate goes through here. The
//! reference timezone has a variable UTC offset across the year, so day
//! arithmetic must happen on civil dates in that zone, never on epoch
//! milliseconds.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// All deadline day-boundary reasoning is anchored to London, matching the
/// procurement portals the tracked RFPs come from.
pub const REFERENCE_TZ: Tz = chrono_tz::Europe::London;

/// The civil date in the reference timezone at the given instant.
pub fn civil_today(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&REFERENCE_TZ).date_naive()
}

/// Whole civil days from "today" (per `now`, in the reference timezone)
/// until `date`. Negative when the date has passed.
pub fn days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    (date - civil_today(now)).num_days()
}
