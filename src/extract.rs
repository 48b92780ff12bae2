use async_trait::async_trait;

use crate::errors::Result;
use crate::models::RawCandidate;

/// Image formats the extraction pipeline accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Tiff,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Tiff => "image/tiff",
        }
    }

    /// Map a file extension to its format, defaulting to PNG for anything
    /// unrecognized.
    pub fn from_extension(ext: &str) -> ImageFormat {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => ImageFormat::Jpeg,
            "tif" | "tiff" => ImageFormat::Tiff,
            _ => ImageFormat::Png,
        }
    }
}

/// Capability interface for turning one text segment into raw deadline
/// candidates. Injected so the pipeline is testable without a network and
/// swappable across providers.
#[async_trait]
pub trait TextCandidateExtractor: Send + Sync {
    async fn extract_from_text(&self, segment: &str) -> Result<Vec<RawCandidate>>;
}

/// Capability interface for extracting deadline candidates from a document
/// image.
#[async_trait]
pub trait ImageCandidateExtractor: Send + Sync {
    async fn extract_from_image(&self, image: &[u8], format: ImageFormat)
        -> Result<Vec<RawCandidate>>;
}
