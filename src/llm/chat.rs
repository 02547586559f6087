use log::{error, info};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{LlmConfig, LlmError};

/// Number of tokens requested by the connectivity probe.
const PROBE_MAX_TOKENS: u32 = 10;

const PROBE_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
const PROBE_PROMPT: &str = "Hello! Please respond with 'Groq API connection successful!'";

pub struct GroqChatClient {
    http: HttpClient,
    model: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct GroqMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct GroqRequest {
    messages: Vec<GroqMessage>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
}

#[derive(Deserialize)]
struct GroqChoice {
    message: GroqMessage,
}

#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub response: String,
}

impl GroqChatClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<Self, LlmError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
        auth.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth);

        let http = HttpClient::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            model,
            base_url,
            temperature,
            max_tokens,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = config.api_key.clone().ok_or(LlmError::MissingApiKey)?;

        Self::new(
            api_key,
            config.completion_model.clone(),
            config.base_url.clone(),
            config.temperature,
            config.max_tokens,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one system+user message pair and returns the first choice's
    /// content, whitespace-trimmed.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<CompletionResponse, LlmError> {
        let req = GroqRequest {
            messages: vec![
                GroqMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                GroqMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        info!("Sending request to Groq API with model: {}", self.model);
        let body = self.send(&req).await?;

        let parsed: GroqResponse =
            serde_json::from_str(&body).map_err(|_| LlmError::MalformedResponse)?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::UnexpectedFormat)?
            .message
            .content;

        Ok(CompletionResponse {
            response: content.trim().to_string(),
        })
    }

    /// Fires a tiny fixed prompt at the upstream API and returns the raw
    /// response envelope, for connectivity checks.
    pub async fn probe(&self) -> Result<Value, LlmError> {
        let req = GroqRequest {
            messages: vec![
                GroqMessage {
                    role: "system".to_string(),
                    content: PROBE_SYSTEM_PROMPT.to_string(),
                },
                GroqMessage {
                    role: "user".to_string(),
                    content: PROBE_PROMPT.to_string(),
                },
            ],
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: PROBE_MAX_TOKENS,
        };

        let body = self.send(&req).await?;
        serde_json::from_str(&body).map_err(|_| LlmError::MalformedResponse)
    }

    async fn send(&self, req: &GroqRequest) -> Result<String, LlmError> {
        let resp = self.http.post(&self.base_url).json(req).send().await?;

        info!("Groq API response status code: {}", resp.status());
        if let Err(err) = resp.error_for_status_ref() {
            let body = resp.text().await.unwrap_or_default();
            error!("Groq API error response: {}", body);
            return Err(LlmError::Request(err));
        }

        Ok(resp.text().await?)
    }
}
