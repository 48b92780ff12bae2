//! Document-to-candidates pipeline driver.
//!
//! Chunk, extract per chunk, concatenate, dedupe. Extraction calls run
//! strictly sequentially — each chunk's call is awaited before the next is
//! issued — so first-occurrence order, and with it dedup tie-breaking, is
//! deterministic. One failed chunk fails the whole document; partial
//! aggregation, retries, and timeouts are the caller's business.

use std::time::Instant;

use tracing::{debug, info};

use crate::chunk::{chunk_text, CHUNK_OVERLAP, MAX_CHARS_PER_CHUNK};
use crate::dedupe::dedupe_candidates;
use crate::errors::Result;
use crate::extract::{ImageCandidateExtractor, ImageFormat, TextCandidateExtractor};
use crate::models::RawCandidate;

#[derive(Debug, Clone, Copy)]
pub struct ExtractionParams {
    pub max_chunk_chars: usize,
    pub overlap_chars: usize,
}

impl Default for ExtractionParams {
    fn default() -> Self {
        Self {
            max_chunk_chars: MAX_CHARS_PER_CHUNK,
            overlap_chars: CHUNK_OVERLAP,
        }
    }
}

/// Extract the deduplicated deadline candidates from a document's text.
pub async fn extract_deadline_candidates<E>(
    extractor: &E,
    text: &str,
    params: ExtractionParams,
) -> Result<Vec<RawCandidate>>
where
    E: TextCandidateExtractor + ?Sized,
{
    let pipeline_start = Instant::now();
    let chunks = chunk_text(text, params.max_chunk_chars, params.overlap_chars)?;
    info!(
        "Extraction started - chars={}, chunks={}",
        text.chars().count(),
        chunks.len()
    );

    let mut all = Vec::new();
    for (idx, chunk) in chunks.iter().enumerate() {
        let start = Instant::now();
        debug!(
            "Chunk extraction - index={}/{}, chars={}",
            idx + 1,
            chunks.len(),
            chunk.chars().count()
        );
        let mut found = extractor.extract_from_text(chunk).await?;
        debug!(
            "Chunk extraction completed - index={}, candidates={}, duration={:.2}s",
            idx + 1,
            found.len(),
            start.elapsed().as_secs_f32()
        );
        all.append(&mut found);
    }

    let raw = all.len();
    let candidates = dedupe_candidates(all);
    info!(
        "Extraction completed - duration={:.2}s, raw={}, unique={}",
        pipeline_start.elapsed().as_secs_f32(),
        raw,
        candidates.len()
    );
    Ok(candidates)
}

/// Extract deadline candidates from a document image via the vision path.
/// A single extractor call; results are passed through as returned.
pub async fn extract_deadline_candidates_from_image<E>(
    extractor: &E,
    image: &[u8],
    format: ImageFormat,
) -> Result<Vec<RawCandidate>>
where
    E: ImageCandidateExtractor + ?Sized,
{
    let start = Instant::now();
    debug!(
        "Image extraction started - bytes={}, mime={}",
        image.len(),
        format.mime_type()
    );
    let candidates = extractor.extract_from_image(image, format).await?;
    info!(
        "Image extraction completed - duration={:.2}s, candidates={}",
        start.elapsed().as_secs_f32(),
        candidates.len()
    );
    Ok(candidates)
}
