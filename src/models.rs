use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One date proposed by the extractor, not yet deduplicated.
///
/// `date` and `label` stay plain strings: the extractor emits them verbatim
/// and the dedup identity is exact string equality on the pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCandidate {
    pub date: String, // "YYYY-MM-DD"
    #[serde(default)]
    pub time: Option<String>, // "HH:MM", 24h
    pub label: String,
    #[serde(default)]
    pub context: Option<String>,
}

/// A reviewed deadline as handed back by the persistence layer.
///
/// Input to urgency classification and calendar export; this crate never
/// mutates or stores one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deadline {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub label: String,
    pub context: Option<String>,
    pub completed: bool,
    pub rfp_name: String,
}
