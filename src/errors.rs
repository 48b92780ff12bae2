use thiserror::Error;

/// Error type for chunking, extraction, and calendar serialization failures.
///
/// Every error is surfaced to the immediate caller unmodified; nothing is
/// retried or swallowed inside the crate. Retry/backoff policy belongs to
/// whoever wraps the extractor.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid chunker configuration: {0}")]
    InvalidConfiguration(String),
    #[error("candidate extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("extractor returned malformed output: {0}")]
    MalformedExtractorOutput(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
