//! OpenAI-compatible implementation of the candidate extractor interfaces.
//!
//! One request per text segment or image, strict JSON-object replies, no
//! internal retries: transport failures surface as `ExtractionFailed` and
//! unparseable replies as `MalformedExtractorOutput`, so callers can tell
//! a broken service from a model returning garbage.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};

use crate::api::{ChatCompletionResponse, DatesPayload};
use crate::errors::{PipelineError, Result};
use crate::extract::{ImageCandidateExtractor, ImageFormat, TextCandidateExtractor};
use crate::models::RawCandidate;
use crate::prompts;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
        }
    }
}

pub struct OpenAiExtractor {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiExtractor {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn complete(&self, user_content: serde_json::Value) -> Result<Vec<RawCandidate>> {
        let url = format!("{}/chat/completions", self.config.api_base);
        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": prompts::SYSTEM_PROMPT },
                { "role": "user", "content": user_content },
            ],
            "response_format": { "type": "json_object" },
        });

        let start = std::time::Instant::now();
        debug!("LLM call starting - model={}", self.config.model);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| PipelineError::ExtractionFailed(format!("request to {url} failed: {e}")))?
            .error_for_status()
            .map_err(|e| PipelineError::ExtractionFailed(format!("HTTP error from {url}: {e}")))?;

        let parsed: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| {
                PipelineError::ExtractionFailed(format!("decoding response from {url}: {e}"))
            })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                PipelineError::MalformedExtractorOutput("no response content".into())
            })?;

        info!(
            "LLM call completed - duration={:.2}s, response_length={} chars",
            start.elapsed().as_secs_f32(),
            content.len()
        );

        parse_candidates(&content)
    }
}

/// Interpret the model's JSON reply as the `{"dates": [...]}` envelope.
/// A well-formed object without a `dates` key means zero candidates.
pub(crate) fn parse_candidates(content: &str) -> Result<Vec<RawCandidate>> {
    let payload: DatesPayload = serde_json::from_str(content).map_err(|e| {
        PipelineError::MalformedExtractorOutput(format!("reply is not a dates object: {e}"))
    })?;
    Ok(payload.dates)
}

#[async_trait]
impl TextCandidateExtractor for OpenAiExtractor {
    async fn extract_from_text(&self, segment: &str) -> Result<Vec<RawCandidate>> {
        self.complete(json!(segment)).await
    }
}

#[async_trait]
impl ImageCandidateExtractor for OpenAiExtractor {
    async fn extract_from_image(
        &self,
        image: &[u8],
        format: ImageFormat,
    ) -> Result<Vec<RawCandidate>> {
        let data_url = format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(image));
        let content = json!([
            { "type": "text", "text": prompts::IMAGE_INSTRUCTION },
            { "type": "image_url", "image_url": { "url": data_url } },
        ]);
        self.complete(content).await
    }
}
