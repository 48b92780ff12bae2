//! Wire types for the OpenAI-compatible chat completions endpoint.

use serde::{Deserialize, Serialize};

use crate::models::RawCandidate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Envelope the system prompt instructs the model to reply with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatesPayload {
    #[serde(default)]
    pub dates: Vec<RawCandidate>,
}
