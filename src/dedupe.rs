use itertools::Itertools;
use tracing::debug;

use crate::models::RawCandidate;

/// Collapse repeated candidates from overlapping chunks into one list.
///
/// Identity is exact string equality on `(date, label)`; the first
/// occurrence wins and later contexts are discarded, not merged. Output
/// order is first-occurrence order across the input stream, which makes
/// the operation idempotent.
pub fn dedupe_candidates(candidates: Vec<RawCandidate>) -> Vec<RawCandidate> {
    let before = candidates.len();
    let deduped: Vec<RawCandidate> = candidates
        .into_iter()
        .unique_by(|c| (c.date.clone(), c.label.clone()))
        .collect();

    let removed = before - deduped.len();
    if removed > 0 {
        debug!(
            "Deduplication - removed={} duplicates, retained={} unique candidates",
            removed,
            deduped.len()
        );
    }
    deduped
}
