//! Deadline extraction and calendar-export core for RFP documents.
//!
//! Turns raw document text into a deduplicated set of deadline candidates
//! via an injected language-model extractor, classifies stored deadlines
//! by urgency against an explicit reference instant, and renders them as
//! iCalendar (.ics) exports or Google-Calendar-shaped payloads.
//!
//! All day-boundary reasoning is anchored to a single fixed civil timezone
//! (Europe/London); see [`civil`]. Document parsing, persistence, and HTTP
//! surfaces live with the callers of this crate.

pub mod api;
pub mod calendar;
pub mod chunk;
pub mod civil;
pub mod dedupe;
pub mod errors;
pub mod extract;
pub mod gcal;
pub mod ics;
pub mod models;
pub mod openai;
pub mod pipeline;
pub mod prompts;
pub mod urgency;

pub use calendar::{build_event, CalendarEvent, EventWhen};
pub use errors::{PipelineError, Result};
pub use extract::{ImageCandidateExtractor, ImageFormat, TextCandidateExtractor};
pub use gcal::{google_event_payload, GoogleEventPayload};
pub use ics::{ics_for_event, ics_for_events};
pub use models::{Deadline, RawCandidate};
pub use openai::{OpenAiConfig, OpenAiExtractor};
pub use pipeline::{
    extract_deadline_candidates, extract_deadline_candidates_from_image, ExtractionParams,
};
pub use urgency::{classify_urgency, UrgencyLevel};
