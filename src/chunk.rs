use tracing::debug;

use crate::errors::{PipelineError, Result};

/// Characters per chunk. The extractor has a bounded effective input size;
/// this leaves room for the system prompt and the response.
pub const MAX_CHARS_PER_CHUNK: usize = 50_000;

/// Character overlap between consecutive chunks, so a deadline statement
/// straddling a chunk boundary still appears whole in at least one chunk.
pub const CHUNK_OVERLAP: usize = 500;

/// Split text into overlapping windows of at most `max_chars` characters.
///
/// Budgets are in characters, not bytes; windows never split a UTF-8
/// code point. Text that already fits returns a single chunk unchanged,
/// and empty input returns a single empty chunk so the extractor still
/// runs once. `overlap_chars >= max_chars` cannot make progress and is
/// rejected as `InvalidConfiguration`.
pub fn chunk_text(text: &str, max_chars: usize, overlap_chars: usize) -> Result<Vec<String>> {
    if max_chars == 0 || overlap_chars >= max_chars {
        return Err(PipelineError::InvalidConfiguration(format!(
            "overlap ({overlap_chars}) must be smaller than chunk size ({max_chars})"
        )));
    }

    let total_chars = text.chars().count();
    if total_chars <= max_chars {
        return Ok(vec![text.to_owned()]);
    }

    // Byte offset of every char boundary, plus the end of the text, so the
    // char-indexed windows below can slice without re-scanning.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut chunks = Vec::new();
    let mut start = 0usize;
    loop {
        let end = (start + max_chars).min(total_chars);
        chunks.push(text[bounds[start]..bounds[end]].to_owned());
        if end == total_chars {
            break;
        }
        start = end - overlap_chars;
    }

    debug!(
        "Chunking complete - total_chars={}, chunks={}, max_chars={}, overlap={}",
        total_chars,
        chunks.len(),
        max_chars,
        overlap_chars
    );
    Ok(chunks)
}
