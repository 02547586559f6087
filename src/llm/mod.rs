pub mod chat;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Groq API key is not configured")]
    MissingApiKey,
    #[error("Invalid API key format: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Failed to communicate with Groq API: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to parse response from Groq API")]
    MalformedResponse,
    #[error("Unexpected response format from Groq API")]
    UnexpectedFormat,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub completion_model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
}
