//! Artwork record schema.

use serde::{Deserialize, Serialize};

use super::language::Language;

/// Display strings for one artwork in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub cultural_context: String,
    /// Pre-recorded audio guide for this language, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl Translation {
    /// Case-insensitive containment test against the searchable fields
    /// (title, description, origin). `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.title, &self.description, &self.origin]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Per-language translations of an artwork.
///
/// French is mandatory; keys for languages outside [`Language::ALL`] are
/// ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    pub fr: Translation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<Translation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wo: Option<Translation>,
}

impl Translations {
    /// Exact lookup, no fallback.
    pub fn get(&self, lang: Language) -> Option<&Translation> {
        match lang {
            Language::Fr => Some(&self.fr),
            Language::En => self.en.as_ref(),
            Language::Wo => self.wo.as_ref(),
        }
    }

    /// The translation for `lang`, or the French one when `lang` is absent.
    pub fn resolve(&self, lang: Language) -> &Translation {
        self.get(lang).unwrap_or(&self.fr)
    }

    /// Languages that have a translation, French first.
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.get(*lang).is_some())
            .collect()
    }
}

/// An artwork in the museum catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkRecord {
    /// Primary key used for navigation.
    pub id: String,
    /// Value encoded in the physical QR/barcode tag. Distinct from `id`.
    pub scan_code: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_gallery: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub category: String,
    pub translations: Translations,
    /// Display date, kept verbatim.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub featured: bool,
}

impl ArtworkRecord {
    /// Resolve the translation for `lang`, falling back to French.
    pub fn translation(&self, lang: Language) -> &Translation {
        self.translations.resolve(lang)
    }

    /// Languages this artwork is translated into, French first.
    pub fn available_languages(&self) -> Vec<Language> {
        self.translations.languages()
    }

    /// Audio guide URL for `lang`, using the same fallback as [`Self::translation`].
    pub fn audio_url(&self, lang: Language) -> Option<&str> {
        self.translation(lang).audio_url.as_deref()
    }
}

/// Resolve the translation of `record` for `lang`.
///
/// Missing languages fall back to French, never to English.
pub fn resolve_translation(record: &ArtworkRecord, lang: Language) -> &Translation {
    record.translation(lang)
}
