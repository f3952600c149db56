//! Visitor assistant: answers questions about the museum and its artworks.
//!
//! Hosted models are optional. The keyword responder works offline and is
//! the fallback whenever a hosted provider fails.
//!
//! # Supported Providers
//!
//! - **Anthropic** - Claude models (requires `ANTHROPIC_API_KEY`)
//! - **OpenAI** - GPT models (requires `OPENAI_API_KEY`)
//! - **Groq** - OpenAI-compatible endpoint (requires `GROQ_API_KEY`)
//! - **Gemini** - Google models (requires `GEMINI_API_KEY`)
//! - **Keywords** - built-in rule table, no network
//!
//! # Example
//!
//! ```no_run
//! use musee::{AssistantProvider, KeywordResponder, Language, Question};
//!
//! let responder = KeywordResponder::new();
//! let answer = responder
//!     .answer(&Question::new("opening hours?").in_language(Language::En))
//!     .unwrap();
//! println!("{}", answer.text);
//! ```

mod anthropic;
mod gemini;
mod keyword;
mod openai;
mod prompts;
mod provider;

pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use keyword::{KeywordResponder, KeywordRule, Responses, KEYWORD_PROVIDER};
pub use openai::{OpenAiProvider, GROQ_API_URL, OPENAI_API_URL};
pub use prompts::{question_prompt, system_prompt};
pub use provider::{Answer, AssistantConfig, AssistantProvider, Question};
