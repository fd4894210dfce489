use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use tracing::{debug, warn};

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one vision turn and returns the text of the first choice.
    async fn create_chat_completion(&self, request: ChatCompletionRequest) -> Result<String>;
}

/// Talks to any OpenAI-compatible `chat/completions` endpoint over plain HTTP.
pub struct OpenAiCompatClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiCompatClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.base_url,
            api_key: config.api_key,
            model: config.model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAiCompatClient {
    async fn create_chat_completion(&self, request: ChatCompletionRequest) -> Result<String> {
        debug!(
            "Creating chat completion with model {} for a {} image ({} base64 chars)",
            self.model,
            request.image.mime_type,
            request.image.payload_len()
        );

        let body = request.to_request_body(&self.model);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or_default().to_string();
            warn!("Gemini API error: {} {}", status.as_u16(), reason);
            return Err(Error::Upstream {
                status: status.as_u16(),
                reason,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::llm(format!("Failed to parse completion response: {}", e)))?;

        debug!(
            "Received chat completion response with {} choices",
            completion.choices.len()
        );

        completion.into_first_content()
    }
}
