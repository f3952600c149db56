//! Assistant provider trait and types.

use serde::{Deserialize, Serialize};

use crate::artwork::{ArtworkRecord, Language};
use crate::error::Result;

/// A visitor question, optionally about one artwork.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The visitor's question.
    pub text: String,

    /// Language the answer should be written in.
    #[serde(default)]
    pub language: Language,

    /// The artwork the visitor is looking at, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork: Option<ArtworkRecord>,
}

impl Question {
    /// Create a new question in French with no artwork context.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: Language::default(),
            artwork: None,
        }
    }

    pub fn in_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Attach the artwork the question is about.
    pub fn about(mut self, artwork: ArtworkRecord) -> Self {
        self.artwork = Some(artwork);
        self
    }
}

/// An assistant's reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    /// Name of the provider that produced the answer.
    pub provider: String,
    pub language: Language,
}

/// Configuration for assistant providers.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Model to use (provider-specific).
    pub model: String,

    /// Maximum tokens in response.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0).
    pub temperature: f64,

    /// HTTP timeout for provider calls.
    pub timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 512,
            temperature: 0.5,
            timeout_secs: 30,
        }
    }
}

impl AssistantConfig {
    /// Default configuration with a different model.
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }
}

/// Trait for assistant providers.
///
/// Implementations must be thread-safe (Send + Sync) so a single provider
/// can serve concurrent requests.
pub trait AssistantProvider: Send + Sync {
    /// Answer a visitor question.
    fn answer(&self, question: &Question) -> Result<Answer>;

    /// Get the configuration for this provider.
    fn config(&self) -> &AssistantConfig;

    /// Get the name of this provider (for logging and answers).
    fn name(&self) -> &str;
}
