use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::Deadline;

/// When an event happens: a bare civil date span for all-day events, or a
/// civil datetime span in the reference timezone for timed ones. Keeping
/// the two shapes as distinct variants stops time-of-day from leaking into
/// day-boundary arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventWhen {
    AllDay { start: NaiveDate, end: NaiveDate },
    Timed { start: NaiveDateTime, end: NaiveDateTime },
}

/// One calendar event derived from a deadline.
///
/// Never persisted; recomputed per export. Both the .ics serializer and the
/// remote-calendar payload builder consume this same record, so the two
/// export paths cannot diverge in date/time derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub title: String,
    pub description: Option<String>,
    pub when: EventWhen,
    /// How long before the start the reminder fires.
    pub reminder: Duration,
}

impl CalendarEvent {
    pub fn is_all_day(&self) -> bool {
        matches!(self.when, EventWhen::AllDay { .. })
    }
}

/// Build the calendar event for a deadline.
///
/// Timed deadlines get a fixed one-hour slot starting at the stated time;
/// untimed ones become all-day events on the deadline date. Both carry a
/// one-day reminder. An empty context never becomes an empty description.
pub fn build_event(deadline: &Deadline) -> CalendarEvent {
    let title = format!("{} - {}", deadline.label, deadline.rfp_name);
    let description = deadline
        .context
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(str::to_owned);

    let when = match deadline.time {
        Some(time) => {
            let start = deadline.date.and_time(time);
            EventWhen::Timed {
                start,
                end: start + Duration::hours(1),
            }
        }
        None => EventWhen::AllDay {
            start: deadline.date,
            end: deadline.date,
        },
    };

    CalendarEvent {
        title,
        description,
        when,
        reminder: Duration::days(1),
    }
}
