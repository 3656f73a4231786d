use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("Required field is missing or empty: {0}")]
    ValidationError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("AI provider request failed: {0}")]
    ProviderError(String),
}

impl From<reqwest::Error> for AiError {
    fn from(error: reqwest::Error) -> Self {
        AiError::HttpError(error.to_string())
    }
}
