//! Chat completion gateway.
//!
//! Encapsulates the outbound call to the external chat-completions
//! endpoint. When no provider credential is configured, the gateway
//! answers from canned replies instead of touching the network.

use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use crate::ai::mock;
use crate::core::config::AppConfig;
use crate::core::models::ChatMessage;
use crate::errors::AiError;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Sampling settings for one completion request.
#[derive(Debug, Clone, Copy)]
pub struct CompletionParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

pub const CHAT_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.7,
    max_tokens: 800,
};

pub const INSPIRATION_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.8,
    max_tokens: 1000,
};

pub const ANALYSIS_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.7,
    max_tokens: 1000,
};

/// Gateway to the external chat-completions provider.
pub struct CompletionClient {
    api_key: Option<String>,
    api_url: String,
    model: String,
    http: Client,
}

impl CompletionClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            api_key: config.ai_api_key.clone(),
            api_url: config.ai_api_url.clone(),
            model: config.ai_model.clone(),
            http,
        }
    }

    /// Whether the gateway answers from canned replies instead of the live
    /// provider.
    #[must_use]
    pub fn is_mock(&self) -> bool {
        self.api_key.is_none()
    }

    /// Sends one completion request and returns the assistant's text.
    ///
    /// Single attempt, no retry. Transport failures surface as
    /// [`AiError::HttpError`], provider-level failures as
    /// [`AiError::ProviderError`]; the HTTP layer reports both as a
    /// generic "service temporarily unavailable" message.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        params: CompletionParams,
    ) -> Result<String, AiError> {
        let Some(api_key) = &self.api_key else {
            info!("No AI credential configured, using canned response");
            return Ok(mock::mock_completion(messages));
        };

        info!(
            "Calling AI provider with {} messages (max_tokens {})",
            messages.len(),
            params.max_tokens
        );

        let request_body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
        });

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiError::HttpError(format!("AI API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AiError::ProviderError(format!(
                "AI API returned {status}: {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| AiError::ProviderError(format!("Failed to parse AI response: {e}")))?;

        response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(ToString::to_string)
            .ok_or_else(|| AiError::ProviderError("No text in response".to_string()))
    }
}
