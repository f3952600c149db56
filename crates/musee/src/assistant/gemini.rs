//! Google Gemini API provider implementation.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::{MuseeError, Result};

use super::prompts;
use super::provider::{Answer, AssistantConfig, AssistantProvider, Question};

/// Gemini API base URL; the model and method are appended.
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const NAME: &str = "gemini";

/// Google Gemini provider.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    config: AssistantConfig,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, AssistantConfig::with_model("gemini-1.5-flash"))
    }

    /// Create a new Gemini provider with custom configuration.
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
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            MuseeError::Config("GEMINI_API_KEY environment variable not set".to_string())
        })?;
        Self::new(api_key)
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", API_BASE, self.config.model)
    }
}

impl AssistantProvider for GeminiProvider {
    fn answer(&self, question: &Question) -> Result<Answer> {
        let body = json!({
            "systemInstruction": {
                "parts": [{ "text": prompts::system_prompt(question.language) }]
            },
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompts::question_prompt(question) }]
                }
            ],
            "generationConfig": {
                "temperature": self.config.temperature,
                "maxOutputTokens": self.config.max_tokens
            }
        });

        debug!(model = %self.config.model, "sending question to Gemini");
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            // The key travels in the URL; keep it out of error messages.
            .map_err(|e| {
                MuseeError::assistant(NAME, format!("API request failed: {}", e.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(MuseeError::assistant(
                NAME,
                format!("API error ({}): {}", status, error_text),
            ));
        }

        let api_response: GenerateResponse = response.json().map_err(|e| {
            MuseeError::assistant(NAME, format!("Failed to parse API response: {}", e.without_url()))
        })?;

        let text = api_response
            .text()
            .ok_or_else(|| MuseeError::assistant(NAME, "No candidates in API response"))?;

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
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenates_parts() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": "Le kora "}, {"text": "a 21 cordes."}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("Le kora a 21 cordes."));
    }

    #[test]
    fn test_no_candidates() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_endpoint_uses_model() {
        let provider = GeminiProvider::new("k").unwrap();
        assert_eq!(
            provider.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }
}
