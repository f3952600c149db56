//! JSON shapes shared by `--json` output and the HTTP API.

use musee::{ArtworkRecord, Language, Translation};
use serde::Serialize;

/// An artwork with its translation resolved for one language.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkView {
    pub id: String,
    pub scan_code: String,
    pub category: String,
    pub featured: bool,
    pub image_url: String,
    pub image_gallery: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub created_at: String,
    /// Language the caller asked for.
    pub language: Language,
    /// Language the translation actually comes from (French on fallback).
    pub resolved_language: Language,
    pub available_languages: Vec<Language>,
    pub translation: Translation,
}

impl ArtworkView {
    pub fn new(record: &ArtworkRecord, language: Language) -> Self {
        let resolved_language = if record.translations.get(language).is_some() {
            language
        } else {
            Language::Fr
        };

        Self {
            id: record.id.clone(),
            scan_code: record.scan_code.clone(),
            category: record.category.clone(),
            featured: record.featured,
            image_url: record.image_url.clone(),
            image_gallery: record.image_gallery.clone(),
            video_url: record.video_url.clone(),
            created_at: record.created_at.clone(),
            language,
            resolved_language,
            available_languages: record.available_languages(),
            translation: record.translation(language).clone(),
        }
    }

    /// Views for a list of records, in order.
    pub fn many(records: &[&ArtworkRecord], language: Language) -> Vec<Self> {
        records.iter().map(|r| Self::new(r, language)).collect()
    }
}
