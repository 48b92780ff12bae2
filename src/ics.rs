//! iCalendar (.ics) rendering for deadline events.
//!
//! Produces RFC 5545 text directly: CRLF line endings, escaped TEXT
//! values, and 75-octet line folding. All-day events use date-only
//! `DTSTART`/`DTEND` with the exclusive end the format requires; timed
//! events reference the civil timezone via `TZID` so clients resolve the
//! wall-clock time themselves.

use chrono::{Duration, NaiveDate};
use xxhash_rust::xxh3::xxh3_64;

use crate::calendar::{CalendarEvent, EventWhen};
use crate::errors::{PipelineError, Result};

const PRODID: &str = "-//rfp-tracker//ics//EN";
const TZID: &str = "Europe/London";

/// Render a single event as a complete VCALENDAR document.
pub fn ics_for_event(event: &CalendarEvent) -> String {
    let mut lines = calendar_header(None);
    push_vevent(&mut lines, event);
    finish(lines)
}

/// Render a named calendar wrapping every event in `events`.
///
/// An empty slice is a caller bug, not an empty-calendar case: callers are
/// expected to have filtered to a non-empty set before exporting, so this
/// fails loudly with `InvalidArgument`.
pub fn ics_for_events(events: &[CalendarEvent], calendar_name: &str) -> Result<String> {
    if events.is_empty() {
        return Err(PipelineError::InvalidArgument(
            "cannot serialize an empty event list".into(),
        ));
    }

    let mut lines = calendar_header(Some(calendar_name));
    for event in events {
        push_vevent(&mut lines, event);
    }
    Ok(finish(lines))
}

fn calendar_header(calendar_name: Option<&str>) -> Vec<String> {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_owned(),
        "VERSION:2.0".to_owned(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_owned(),
        "METHOD:PUBLISH".to_owned(),
    ];
    if let Some(name) = calendar_name {
        lines.push(format!("X-WR-CALNAME:{}", escape_text(name)));
    }
    lines
}

fn finish(mut lines: Vec<String>) -> String {
    lines.push("END:VCALENDAR".to_owned());
    let mut out = String::new();
    for line in lines {
        out.push_str(&fold(&line));
        out.push_str("\r\n");
    }
    out
}

fn push_vevent(lines: &mut Vec<String>, event: &CalendarEvent) {
    lines.push("BEGIN:VEVENT".to_owned());
    lines.push(format!("UID:{}", event_uid(event)));
    lines.push(format!("DTSTAMP:{}", dtstamp(event)));
    lines.push(format!("SUMMARY:{}", escape_text(&event.title)));
    if let Some(description) = &event.description {
        lines.push(format!("DESCRIPTION:{}", escape_text(description)));
    }

    match &event.when {
        EventWhen::AllDay { start, end } => {
            lines.push(format!("DTSTART;VALUE=DATE:{}", basic_date(*start)));
            // DTEND is exclusive by convention, so a one-day event ends on
            // the morning after.
            lines.push(format!("DTEND;VALUE=DATE:{}", basic_date(*end + Duration::days(1))));
        }
        EventWhen::Timed { start, end } => {
            lines.push(format!("DTSTART;TZID={TZID}:{}", start.format("%Y%m%dT%H%M%S")));
            lines.push(format!("DTEND;TZID={TZID}:{}", end.format("%Y%m%dT%H%M%S")));
        }
    }

    lines.push("BEGIN:VALARM".to_owned());
    lines.push("ACTION:DISPLAY".to_owned());
    lines.push("DESCRIPTION:Deadline reminder".to_owned());
    lines.push(format!("TRIGGER:{}", trigger_value(event.reminder)));
    lines.push("END:VALARM".to_owned());
    lines.push("END:VEVENT".to_owned());
}

/// Stable content hash so re-exporting the same deadline yields the same
/// UID across runs.
fn event_uid(event: &CalendarEvent) -> String {
    let start_key = match &event.when {
        EventWhen::AllDay { start, .. } => start.format("%Y%m%d").to_string(),
        EventWhen::Timed { start, .. } => start.format("%Y%m%dT%H%M%S").to_string(),
    };
    let seed = format!("{}|{}", event.title, start_key);
    format!("{:016x}@rfp-tracker", xxh3_64(seed.as_bytes()))
}

/// DTSTAMP derived from the event start (midnight UTC of its civil date),
/// keeping serialization a pure function of the event.
fn dtstamp(event: &CalendarEvent) -> String {
    let date = match &event.when {
        EventWhen::AllDay { start, .. } => *start,
        EventWhen::Timed { start, .. } => start.date(),
    };
    format!("{}T000000Z", basic_date(date))
}

fn basic_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn trigger_value(reminder: Duration) -> String {
    let days = reminder.num_days();
    if days > 0 && reminder == Duration::days(days) {
        format!("-P{days}D")
    } else {
        format!("-PT{}M", reminder.num_minutes())
    }
}

/// Escape a TEXT value: backslash, semicolon, comma, and literal newlines.
fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Fold a content line to 75 octets per segment; continuation lines start
/// with a single space that counts toward their limit. Splits only at char
/// boundaries so multi-byte text stays intact.
fn fold(line: &str) -> String {
    const LIMIT: usize = 75;
    if line.len() <= LIMIT {
        return line.to_owned();
    }

    let mut out = String::with_capacity(line.len() + line.len() / 60);
    let mut used = 0usize;
    let mut cap = LIMIT;
    for ch in line.chars() {
        let width = ch.len_utf8();
        if used + width > cap {
            out.push_str("\r\n ");
            used = 0;
            cap = LIMIT - 1;
        }
        out.push(ch);
        used += width;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_event;
    use crate::models::Deadline;

    fn deadline(date: &str, time: Option<&str>, context: Option<&str>) -> Deadline {
        Deadline {
            date: date.parse().unwrap(),
            time: time.map(|t| format!("{t}:00").parse().unwrap()),
            label: "Proposal Due".into(),
            context: context.map(str::to_owned),
            completed: false,
            rfp_name: "NHS RFP".into(),
        }
    }

    #[test]
    fn single_event_is_a_complete_calendar() {
        let ics = ics_for_event(&build_event(&deadline("2026-03-15", Some("14:00"), None)));
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
        assert_eq!(ics.matches("END:VEVENT").count(), 1);
    }

    #[test]
    fn summary_joins_label_and_rfp_name() {
        let ics = ics_for_event(&build_event(&deadline("2026-03-15", Some("14:00"), None)));
        assert!(ics.contains("SUMMARY:Proposal Due - NHS RFP"));
    }

    #[test]
    fn timed_event_uses_tzid_datetime_form() {
        let ics = ics_for_event(&build_event(&deadline("2026-03-15", Some("14:00"), None)));
        assert!(ics.contains("DTSTART;TZID=Europe/London:20260315T140000"));
        assert!(ics.contains("DTEND;TZID=Europe/London:20260315T150000"));
    }

    #[test]
    fn all_day_event_uses_date_form_with_exclusive_end() {
        let ics = ics_for_event(&build_event(&deadline("2026-03-15", None, None)));
        assert!(ics.contains("DTSTART;VALUE=DATE:20260315"));
        assert!(ics.contains("DTEND;VALUE=DATE:20260316"));
        // No datetime form anywhere in the event.
        assert!(!ics.contains("DTSTART;TZID"));
    }

    #[test]
    fn alarm_fires_one_day_before() {
        let ics = ics_for_event(&build_event(&deadline("2026-03-15", Some("14:00"), None)));
        assert_eq!(ics.matches("BEGIN:VALARM").count(), 1);
        assert!(ics.contains("TRIGGER:-P1D"));
        assert!(ics.contains("ACTION:DISPLAY"));
    }

    #[test]
    fn description_present_only_when_context_given() {
        let with = ics_for_event(&build_event(&deadline(
            "2026-03-15",
            Some("14:00"),
            Some("Submit via procurement portal by 2pm"),
        )));
        assert!(with.contains("DESCRIPTION:Submit via procurement portal by 2pm"));

        let without = ics_for_event(&build_event(&deadline("2026-03-15", Some("14:00"), None)));
        let vevent = &without
            [without.find("BEGIN:VEVENT").unwrap()..without.find("BEGIN:VALARM").unwrap()];
        assert!(!vevent.contains("DESCRIPTION:"));
    }

    #[test]
    fn text_values_are_escaped() {
        let mut d = deadline("2026-03-15", None, Some("line one\nsemis; and, commas"));
        d.label = "Q&A; review".into();
        let ics = ics_for_event(&build_event(&d));
        assert!(ics.contains("SUMMARY:Q&A\\; review - NHS RFP"));
        assert!(ics.contains("DESCRIPTION:line one\\nsemis\\; and\\, commas"));
    }

    #[test]
    fn long_lines_are_folded_at_75_octets() {
        let context = "x".repeat(300);
        let ics = ics_for_event(&build_event(&deadline("2026-03-15", None, Some(&context))));
        for line in ics.split("\r\n") {
            assert!(line.len() <= 75, "unfolded line of {} octets", line.len());
        }
        // Unfolding restores the original value.
        let unfolded = ics.replace("\r\n ", "");
        assert!(unfolded.contains(&format!("DESCRIPTION:{context}")));
    }

    #[test]
    fn uid_is_stable_across_serializations() {
        let event = build_event(&deadline("2026-03-15", Some("14:00"), None));
        let a = ics_for_event(&event);
        let b = ics_for_event(&event);
        assert_eq!(a, b);
        assert_eq!(a.matches("UID:").count(), 1);
    }

    #[test]
    fn bulk_export_contains_one_vevent_per_deadline() {
        let events = vec![
            build_event(&deadline("2026-03-15", Some("14:00"), None)),
            build_event(&deadline("2026-04-20", None, None)),
            build_event(&deadline("2026-05-01", None, Some("kickoff"))),
        ];
        let ics = ics_for_events(&events, "RFP Deadline Tracker").unwrap();
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
        assert_eq!(ics.matches("END:VEVENT").count(), 3);
        assert_eq!(ics.matches("BEGIN:VCALENDAR").count(), 1);
        assert!(ics.contains("X-WR-CALNAME:RFP Deadline Tracker"));
    }

    #[test]
    fn bulk_export_of_nothing_is_an_error() {
        let err = ics_for_events(&[], "RFP Deadline Tracker").unwrap_err();
        assert!(matches!(err, PipelineError::InvalidArgument(_)));
    }
}
