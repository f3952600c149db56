//! Main Museum struct and public API.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::artwork::Language;
use crate::assistant::{Answer, AssistantProvider, KeywordResponder, Question};
use crate::catalog::Catalog;
use crate::error::Result;

/// Configuration for the museum facade.
#[derive(Debug, Clone)]
pub struct MuseumConfig {
    /// Language used when a caller does not name one.
    pub default_language: Language,
    /// Answer with the keyword responder when the hosted provider fails.
    pub fallback_to_keywords: bool,
}

impl Default for MuseumConfig {
    fn default() -> Self {
        Self {
            default_language: Language::Fr,
            fallback_to_keywords: true,
        }
    }
}

/// Catalog plus visitor assistant.
///
/// The catalog is shared read-only; cloning a `Museum` is cheap.
#[derive(Clone)]
pub struct Museum {
    catalog: Arc<Catalog>,
    config: MuseumConfig,
    assistant: Option<Arc<dyn AssistantProvider>>,
    keywords: Arc<KeywordResponder>,
}

impl Museum {
    /// Create a museum over `catalog` with default configuration.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, MuseumConfig::default())
    }

    /// Create a museum with custom configuration.
    pub fn with_config(catalog: Catalog, config: MuseumConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
            assistant: None,
            keywords: Arc::new(KeywordResponder::new()),
        }
    }

    /// Use a hosted assistant provider for visitor questions.
    pub fn with_assistant(mut self, provider: impl AssistantProvider + 'static) -> Self {
        self.assistant = Some(Arc::new(provider));
        self
    }

    /// Use an already shared assistant provider.
    pub fn with_shared_assistant(mut self, provider: Arc<dyn AssistantProvider>) -> Self {
        self.assistant = Some(provider);
        self
    }

    /// Replace the keyword responder used offline and as fallback.
    pub fn with_keywords(mut self, keywords: KeywordResponder) -> Self {
        self.keywords = Arc::new(keywords);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &MuseumConfig {
        &self.config
    }

    /// Name of the hosted provider, if one is configured.
    pub fn assistant_name(&self) -> Option<&str> {
        self.assistant.as_deref().map(|a| a.name())
    }

    /// Answer a visitor question.
    ///
    /// `artwork_id` attaches that artwork as context; an unknown id is
    /// ignored. Without a hosted provider the keyword responder answers.
    /// When the hosted provider fails, the keyword responder answers if
    /// fallback is enabled, otherwise the error is returned.
    ///
    /// This blocks on network I/O when a hosted provider is configured.
    pub fn ask(
        &self,
        text: &str,
        language: Option<Language>,
        artwork_id: Option<&str>,
    ) -> Result<Answer> {
        let language = language.unwrap_or(self.config.default_language);
        let mut question = Question::new(text).in_language(language);

        if let Some(id) = artwork_id {
            match self.catalog.get_by_id(id) {
                Some(artwork) => question = question.about(artwork.clone()),
                None => debug!(id, "question names an unknown artwork"),
            }
        }

        let Some(provider) = &self.assistant else {
            return Ok(self.keywords.respond(&question));
        };

        match provider.answer(&question) {
            Ok(answer) => Ok(answer),
            Err(e) if self.config.fallback_to_keywords => {
                warn!(provider = provider.name(), error = %e, "assistant failed, using keyword responder");
                Ok(self.keywords.respond(&question))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{AssistantConfig, KEYWORD_PROVIDER};
    use crate::catalog::CatalogLoader;
    use crate::error::MuseeError;

    struct FailingProvider {
        config: AssistantConfig,
    }

    impl AssistantProvider for FailingProvider {
        fn answer(&self, _question: &Question) -> Result<Answer> {
            Err(MuseeError::Assistant {
                provider: "failing".to_string(),
                message: "unreachable".to_string(),
            })
        }

        fn config(&self) -> &AssistantConfig {
            &self.config
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct EchoProvider {
        config: AssistantConfig,
    }

    impl AssistantProvider for EchoProvider {
        fn answer(&self, question: &Question) -> Result<Answer> {
            let title = question
                .artwork
                .as_ref()
                .map(|a| a.translation(question.language).title.clone())
                .unwrap_or_default();
            Ok(Answer {
                text: format!("{}|{}", question.text, title),
                provider: "echo".to_string(),
                language: question.language,
            })
        }

        fn config(&self) -> &AssistantConfig {
            &self.config
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    fn museum() -> Museum {
        Museum::new(CatalogLoader::new().load_bundled().unwrap())
    }

    #[test]
    fn test_ask_without_provider_uses_keywords() {
        let answer = museum().ask("horaires ?", None, None).unwrap();
        assert_eq!(answer.provider, KEYWORD_PROVIDER);
        assert_eq!(answer.language, Language::Fr);
    }

    #[test]
    fn test_ask_passes_artwork_context() {
        let museum = museum().with_assistant(EchoProvider {
            config: AssistantConfig::default(),
        });
        let answer = museum.ask("hi", Some(Language::En), Some("kora")).unwrap();
        assert_eq!(answer.text, "hi|Kora");
        assert_eq!(museum.assistant_name(), Some("echo"));

        let unknown = museum.ask("hi", Some(Language::En), Some("nope")).unwrap();
        assert_eq!(unknown.text, "hi|");
    }

    #[test]
    fn test_fallback_on_provider_error() {
        let museum = museum().with_assistant(FailingProvider {
            config: AssistantConfig::default(),
        });
        let answer = museum.ask("merci", None, None).unwrap();
        assert_eq!(answer.provider, KEYWORD_PROVIDER);
    }

    #[test]
    fn test_custom_keywords() {
        use crate::assistant::{KeywordRule, Responses};

        let rule = KeywordRule::new("wifi", r"\bwi-?fi\b", Responses::new("Oui.", "Yes.", "Waaw."))
            .unwrap();
        let keywords = KeywordResponder::with_rules(vec![rule], Responses::new("?", "?", "?"));
        let museum = museum().with_keywords(keywords);

        assert_eq!(museum.ask("WiFi?", Some(Language::Wo), None).unwrap().text, "Waaw.");
        assert_eq!(museum.ask("horaires", None, None).unwrap().text, "?");
    }

    #[test]
    fn test_no_fallback_propagates_error() {
        let catalog = CatalogLoader::new().load_bundled().unwrap();
        let museum = Museum::with_config(
            catalog,
            MuseumConfig {
                fallback_to_keywords: false,
                ..MuseumConfig::default()
            },
        )
        .with_assistant(FailingProvider {
            config: AssistantConfig::default(),
        });
        assert!(matches!(
            museum.ask("merci", None, None),
            Err(MuseeError::Assistant { .. })
        ));
    }
}
