use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::civil::days_until;

/// How pressing a deadline is, relative to a supplied reference instant.
///
/// Never stored: urgency is relative to "now" and would go stale, so it is
/// recomputed per rendering request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Overdue,
    Critical,
    Warning,
    Safe,
    Completed,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Overdue => "overdue",
            UrgencyLevel::Critical => "critical",
            UrgencyLevel::Warning => "warning",
            UrgencyLevel::Safe => "safe",
            UrgencyLevel::Completed => "completed",
        }
    }
}

/// Classify a deadline date against `now`.
///
/// Completed deadlines are always `Completed`, regardless of date. The
/// remaining levels partition whole-civil-day distances computed in the
/// reference timezone: past dates are `Overdue`, today through 3 days out
/// is `Critical`, 4 through 7 is `Warning`, beyond that `Safe`.
///
/// `now` is an explicit parameter so classification stays deterministic;
/// only the outermost caller should default it to the wall clock.
pub fn classify_urgency(date: NaiveDate, completed: bool, now: DateTime<Utc>) -> UrgencyLevel {
    if completed {
        return UrgencyLevel::Completed;
    }

    match days_until(date, now) {
        d if d < 0 => UrgencyLevel::Overdue,
        0..=3 => UrgencyLevel::Critical,
        4..=7 => UrgencyLevel::Warning,
        _ => UrgencyLevel::Safe,
    }
}
