//! OpenAI-compatible chat completions provider.
//!
//! Groq exposes the same API under a different base URL, so both services
//! go through this provider.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::{MuseeError, Result};

use super::prompts;
use super::provider::{Answer, AssistantConfig, AssistantProvider, Question};

/// OpenAI API endpoint.
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Groq API endpoint (OpenAI-compatible).
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// OpenAI-compatible chat provider.
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    api_url: String,
    name: String,
    config: AssistantConfig,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, AssistantConfig::with_model("gpt-4o-mini"))
    }

    /// Create a new OpenAI provider with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: AssistantConfig) -> Result<Self> {
        Self::with_endpoint("openai", OPENAI_API_URL, api_key, config)
    }

    /// Create a Groq provider with the given API key.
    pub fn groq(api_key: impl Into<String>) -> Result<Self> {
        Self::groq_with_config(api_key, AssistantConfig::with_model("llama-3.1-8b-instant"))
    }

    /// Create a Groq provider with custom configuration.
    pub fn groq_with_config(api_key: impl Into<String>, config: AssistantConfig) -> Result<Self> {
        Self::with_endpoint("groq", GROQ_API_URL, api_key, config)
    }

    /// Create a provider for any OpenAI-compatible endpoint.
    pub fn with_endpoint(
        name: impl Into<String>,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        config: AssistantConfig,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MuseeError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            api_url: api_url.into(),
            name: name.into(),
            config,
        })
    }

    /// Create an OpenAI provider from `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(env_key("OPENAI_API_KEY")?)
    }

    /// Create a Groq provider from `GROQ_API_KEY`.
    pub fn groq_from_env() -> Result<Self> {
        Self::groq(env_key("GROQ_API_KEY")?)
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| MuseeError::Config(format!("Invalid API key: {}", e)))?,
        );
        Ok(headers)
    }
}

fn env_key(var: &str) -> Result<String> {
    std::env::var(var)
        .map_err(|_| MuseeError::Config(format!("{} environment variable not set", var)))
}

impl AssistantProvider for OpenAiProvider {
    fn answer(&self, question: &Question) -> Result<Answer> {
        let body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "messages": [
                {
                    "role": "system",
                    "content": prompts::system_prompt(question.language)
                },
                {
                    "role": "user",
                    "content": prompts::question_prompt(question)
                }
            ]
        });

        debug!(provider = %self.name, model = %self.config.model, "sending chat completion");
        let response = self
            .client
            .post(&self.api_url)
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .map_err(|e| MuseeError::assistant(&self.name, format!("API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(MuseeError::assistant(
                &self.name,
                format!("API error ({}): {}", status, error_text),
            ));
        }

        let api_response: ChatResponse = response.json().map_err(|e| {
            MuseeError::assistant(&self.name, format!("Failed to parse API response: {}", e))
        })?;

        let text = api_response
            .text()
            .ok_or_else(|| MuseeError::assistant(&self.name, "No choices in API response"))?;

        Ok(Answer {
            text: text.trim().to_string(),
            provider: self.name.clone(),
            language: question.language,
        })
    }

    fn config(&self) -> &AssistantConfig {
        &self.config
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

impl ChatResponse {
    fn text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}
