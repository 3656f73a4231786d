//! High-level AI operations consumed by the HTTP layer.

use tracing::info;

use crate::ai::client::{ANALYSIS_PARAMS, CHAT_PARAMS, CompletionClient, INSPIRATION_PARAMS};
use crate::ai::prompts;
use crate::core::config::AppConfig;
use crate::core::models::{ChatMessage, ChatReply, ContentAnalysis, InspirationSuggestion};
use crate::errors::AiError;
use crate::extract::{extract_inspirations, parse_analysis, parse_inspirations};

/// The AI service behind the creator dashboard: chat advice, inspiration
/// generation, and content analysis. Explicitly constructed; owns the
/// provider gateway and holds no other state.
pub struct AiService {
    client: CompletionClient,
}

impl AiService {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: CompletionClient::new(config),
        }
    }

    /// Answers a chat message in the context of prior history and mines
    /// the reply for content suggestions.
    pub async fn generate_chat_response(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> Result<ChatReply, AiError> {
        require_non_empty("message", message)?;
        info!(
            "Generating chat response ({} history messages)",
            history.len()
        );

        let prompt = prompts::build_chat_prompt(message, history);
        let response = self.client.complete(&prompt, CHAT_PARAMS).await?;
        let inspiration = extract_inspirations(&response);

        Ok(ChatReply {
            response,
            inspiration,
        })
    }

    /// Generates suggestion triples for a creation topic.
    pub async fn generate_inspirations(
        &self,
        topic: &str,
    ) -> Result<Vec<InspirationSuggestion>, AiError> {
        require_non_empty("topic", topic)?;
        info!("Generating inspirations for topic");

        let prompt = prompts::build_inspiration_prompt(topic);
        let response = self.client.complete(&prompt, INSPIRATION_PARAMS).await?;

        Ok(parse_inspirations(&response))
    }

    /// Produces a strengths/weaknesses/suggestions breakdown of a piece
    /// of content.
    pub async fn analyze_content(&self, content: &str) -> Result<ContentAnalysis, AiError> {
        require_non_empty("content", content)?;
        info!("Analyzing content ({} bytes)", content.len());

        let prompt = prompts::build_analysis_prompt(content);
        let response = self.client.complete(&prompt, ANALYSIS_PARAMS).await?;

        Ok(parse_analysis(&response))
    }
}

/// Rejects missing/blank required fields before any gateway call is made.
fn require_non_empty(field: &str, value: &str) -> Result<(), AiError> {
    if value.trim().is_empty() {
        return Err(AiError::ValidationError(field.to_string()));
    }
    Ok(())
}
