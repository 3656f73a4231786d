use std::env;

/// Placeholder credential shipped in the sample environment file; treated
/// the same as no credential at all.
const API_KEY_PLACEHOLDER: &str = "your_api_key_here";

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ai_api_key: Option<String>,
    pub ai_api_url: String,
    pub ai_model: String,
}

impl AppConfig {
    /// Reads configuration from the process environment. Every field has a
    /// default, so construction cannot fail; a missing, empty, or
    /// placeholder `AI_API_KEY` switches the gateway into canned-response
    /// mode.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            ai_api_key: resolve_api_key(env::var("AI_API_KEY").ok()),
            ai_api_url: env::var("AI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            ai_model: env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }
}

/// Filters out empty and placeholder credentials.
#[must_use]
pub fn resolve_api_key(raw: Option<String>) -> Option<String> {
    raw.map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty() && key != API_KEY_PLACEHOLDER)
}
