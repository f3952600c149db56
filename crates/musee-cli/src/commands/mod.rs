//! CLI command implementations.

pub mod ask;
pub mod categories;
pub mod list;
pub mod scan;
pub mod serve;
pub mod show;
pub mod validate;

use std::path::PathBuf;
use std::sync::Arc;

use musee::{
    AnthropicProvider, AssistantConfig, AssistantProvider, Catalog, CatalogLoader,
    GeminiProvider, Language, LoaderConfig, OpenAiProvider,
};
use tracing::{debug, warn};

use crate::cli::LlmProviderChoice;

/// Where the catalog comes from, shared by every command.
pub struct CatalogArgs {
    pub path: Option<PathBuf>,
    pub lenient: bool,
}

impl CatalogArgs {
    /// Load the catalog from the given file, or the bundled one.
    pub fn load(&self) -> Result<Catalog, Box<dyn std::error::Error>> {
        let loader = CatalogLoader::with_config(LoaderConfig {
            strict: !self.lenient,
            ..LoaderConfig::default()
        });

        let catalog = match &self.path {
            Some(path) => loader.load_path(path)?,
            None => loader.load_bundled()?,
        };
        debug!(origin = %catalog.source().origin, records = catalog.len(), "catalog ready");
        Ok(catalog)
    }
}

/// Parse a language code, falling back to French with a warning.
pub fn parse_language(code: &str) -> Language {
    Language::parse(code).unwrap_or_else(|| {
        warn!(code, "unsupported language, using French");
        Language::Fr
    })
}

/// Build the hosted assistant provider for `choice`, if any.
pub fn build_provider(
    choice: LlmProviderChoice,
    model: Option<String>,
) -> Result<Option<Arc<dyn AssistantProvider>>, Box<dyn std::error::Error>> {
    let provider: Arc<dyn AssistantProvider> = match (choice, model) {
        (LlmProviderChoice::None, _) => return Ok(None),
        (LlmProviderChoice::Anthropic, None) => Arc::new(AnthropicProvider::from_env()?),
        (LlmProviderChoice::Anthropic, Some(m)) => Arc::new(AnthropicProvider::with_config(
            env_key("ANTHROPIC_API_KEY")?,
            AssistantConfig::with_model(m),
        )?),
        (LlmProviderChoice::Openai, None) => Arc::new(OpenAiProvider::from_env()?),
        (LlmProviderChoice::Openai, Some(m)) => Arc::new(OpenAiProvider::with_config(
            env_key("OPENAI_API_KEY")?,
            AssistantConfig::with_model(m),
        )?),
        (LlmProviderChoice::Groq, None) => Arc::new(OpenAiProvider::groq_from_env()?),
        (LlmProviderChoice::Groq, Some(m)) => Arc::new(OpenAiProvider::groq_with_config(
            env_key("GROQ_API_KEY")?,
            AssistantConfig::with_model(m),
        )?),
        (LlmProviderChoice::Gemini, None) => Arc::new(GeminiProvider::from_env()?),
        (LlmProviderChoice::Gemini, Some(m)) => Arc::new(GeminiProvider::with_config(
            env_key("GEMINI_API_KEY")?,
            AssistantConfig::with_model(m),
        )?),
    };

    debug!(provider = provider.name(), model = %provider.config().model, "assistant provider ready");
    Ok(Some(provider))
}

fn env_key(var: &str) -> Result<String, Box<dyn std::error::Error>> {
    std::env::var(var).map_err(|_| format!("{} environment variable not set", var).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_fallback() {
        assert_eq!(parse_language("wo"), Language::Wo);
        assert_eq!(parse_language("de"), Language::Fr);
    }

    #[test]
    fn test_no_provider() {
        assert!(build_provider(LlmProviderChoice::None, None).unwrap().is_none());
    }

    #[test]
    fn test_load_bundled_by_default() {
        let args = CatalogArgs {
            path: None,
            lenient: false,
        };
        assert!(!args.load().unwrap().is_empty());
    }
}
