//! Anthropic Claude API provider implementation.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::{MuseeError, Result};

use super::prompts;
use super::provider::{Answer, AssistantConfig, AssistantProvider, Question};

/// Anthropic API endpoint.
const API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Anthropic API version.
const API_VERSION: &str = "2023-06-01";

const NAME: &str = "anthropic";

/// Anthropic Claude provider.
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    config: AssistantConfig,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, AssistantConfig::default())
    }

    /// Create a new Anthropic provider with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: AssistantConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MuseeError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// Create from environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            MuseeError::Config("ANTHROPIC_API_KEY environment variable not set".to_string())
        })?;
        Self::new(api_key)
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| MuseeError::Config(format!("Invalid API key: {}", e)))?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));
        Ok(headers)
    }
}

impl AssistantProvider for AnthropicProvider {
    fn answer(&self, question: &Question) -> Result<Answer> {
        let body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "system": prompts::system_prompt(question.language),
            "messages": [
                {
                    "role": "user",
                    "content": prompts::question_prompt(question)
                }
            ]
        });

        debug!(model = %self.config.model, "sending question to Anthropic");
        let response = self
            .client
            .post(API_URL)
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .map_err(|e| MuseeError::assistant(NAME, format!("API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(MuseeError::assistant(
                NAME,
                format!("API error ({}): {}", status, error_text),
            ));
        }

        let api_response: ApiResponse = response.json().map_err(|e| {
            MuseeError::assistant(NAME, format!("Failed to parse API response: {}", e))
        })?;

        let text = api_response
            .text()
            .ok_or_else(|| MuseeError::assistant(NAME, "No text in API response"))?;

        Ok(Answer {
            text: text.trim().to_string(),
            provider: NAME.to_string(),
            language: question.language,
        })
    }

    fn config(&self) -> &AssistantConfig {
        &self.config
    }

    fn name(&self) -> &str {
        NAME
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

impl ApiResponse {
    /// First text block of the reply.
    fn text(self) -> Option<String> {
        self.content
            .into_iter()
            .find(|block| block.content_type == "text")
            .map(|block| block.text)
    }
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_block() {
        let json = r#"{
            "content": [
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "Le masque vient de Côte d'Ivoire."}
            ]
        }"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.text().as_deref(),
            Some("Le masque vient de Côte d'Ivoire.")
        );
    }

    #[test]
    fn test_no_text_block() {
        let response: ApiResponse = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_headers() {
        let provider = AnthropicProvider::new("test-key").unwrap();
        let headers = provider.build_headers().unwrap();
        assert_eq!(headers["x-api-key"], "test-key");
        assert_eq!(headers["anthropic-version"], API_VERSION);
        assert_eq!(provider.name(), "anthropic");
    }
}
