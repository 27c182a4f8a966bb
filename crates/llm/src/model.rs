//! Chat model client.
//!
//! [`ChatModel`] is the seam between the pipeline and the external
//! text-generation API; production uses [`OpenAiChatModel`], tests substitute
//! a stub.

use async_trait::async_trait;
use serde::Deserialize;

/// Errors from the model API layer.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The model API returned a non-2xx status code.
    #[error("Model API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The API answered 2xx but the completion payload was not usable.
    #[error("Malformed model API response: {0}")]
    MalformedResponse(String),

    /// A prompt template could not be loaded.
    #[error("Prompt template error: {0}")]
    Template(String),
}

/// A single-shot text completion call.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Model identifier used for logging and audit file names.
    fn name(&self) -> &str;

    /// Send one prompt and return the response text.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Calls are made with temperature 0.0 so repeated summarization of the same
/// transcript is reproducible.
pub struct OpenAiChatModel {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl OpenAiChatModel {
    /// Create a new client.
    ///
    /// * `base_url` - API base, e.g. `https://api.openai.com/v1`.
    /// * `api_key`  - bearer token.
    /// * `model`    - model identifier, e.g. `gpt-4o-mini`.
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let body = serde_json::json!({
            "model": self.model,
            "temperature": 0.0,
            "messages": [{"role": "user", "content": prompt}],
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::MalformedResponse("empty choices array".to_string()))
    }
}
