//! Google-Calendar-shaped event payloads.
//!
//! Builds the events-API request body from the same `CalendarEvent` the
//! .ics serializer consumes, so a deadline exports identically whichever
//! path it takes. OAuth and HTTP delivery live with the caller.

use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarEvent, EventWhen};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEventPayload {
    pub summary: String,
    /// Always present; the events API treats a missing and an empty
    /// description the same way.
    pub description: String,
    pub start: GoogleEventTime,
    pub end: GoogleEventTime,
    pub reminders: GoogleReminders,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEventTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleReminders {
    pub use_default: bool,
    pub overrides: Vec<GoogleReminderOverride>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleReminderOverride {
    pub method: String,
    pub minutes: i64,
}

/// Build the request body for inserting or updating the event remotely.
pub fn google_event_payload(event: &CalendarEvent) -> GoogleEventPayload {
    let (start, end) = match &event.when {
        EventWhen::AllDay { start, end } => (
            GoogleEventTime {
                date: Some(start.format("%Y-%m-%d").to_string()),
                date_time: None,
                time_zone: None,
            },
            GoogleEventTime {
                date: Some(end.format("%Y-%m-%d").to_string()),
                date_time: None,
                time_zone: None,
            },
        ),
        EventWhen::Timed { start, end } => (
            GoogleEventTime {
                date: None,
                date_time: Some(start.format("%Y-%m-%dT%H:%M:%S").to_string()),
                time_zone: Some("Europe/London".into()),
            },
            GoogleEventTime {
                date: None,
                date_time: Some(end.format("%Y-%m-%dT%H:%M:%S").to_string()),
                time_zone: Some("Europe/London".into()),
            },
        ),
    };

    GoogleEventPayload {
        summary: event.title.clone(),
        description: event.description.clone().unwrap_or_default(),
        start,
        end,
        reminders: GoogleReminders {
            use_default: false,
            overrides: vec![GoogleReminderOverride {
                method: "popup".into(),
                minutes: event.reminder.num_minutes(),
            }],
        },
    }
}
