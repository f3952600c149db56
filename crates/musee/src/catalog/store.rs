//! The in-memory artwork catalog and its read operations.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::artwork::{ArtworkRecord, Language};

use super::query::CategoryFilter;
use super::source::CatalogSource;

/// Read-only collection of artworks, in source order.
///
/// Built once by [`CatalogLoader`](super::CatalogLoader) and never mutated,
/// so it can be shared across threads behind an `Arc` without locking.
/// Every query returns borrowed views into the store.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ArtworkRecord>,
    source: CatalogSource,
}

/// Summary counts over a catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub featured: usize,
    /// Records per category, in first-occurrence order.
    pub by_category: IndexMap<String, usize>,
    /// Records carrying a translation for each language.
    pub by_language: IndexMap<Language, usize>,
}

impl Catalog {
    /// Wrap already validated records.
    pub fn new(records: Vec<ArtworkRecord>, source: CatalogSource) -> Self {
        Self { records, source }
    }

    /// All records in source order.
    pub fn records(&self) -> &[ArtworkRecord] {
        &self.records
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose `id` equals `id`.
    pub fn get_by_id(&self, id: &str) -> Option<&ArtworkRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// First record whose scan code equals the decoded scan payload.
    ///
    /// Surrounding whitespace from the scanner is ignored. An empty payload
    /// never matches. Only `scan_code` is consulted, never `id`.
    pub fn get_by_scan_code(&self, code: &str) -> Option<&ArtworkRecord> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.records.iter().find(|r| r.scan_code == code)
    }

    /// Records in the given category (case-sensitive), or all of them.
    pub fn filter_by_category(&self, filter: &CategoryFilter) -> Vec<&ArtworkRecord> {
        self.records.iter().filter(|r| filter.accepts(r)).collect()
    }

    /// Records whose title, description or origin in `lang` (French fallback)
    /// contains `text`, ignoring case. An empty `text` matches everything.
    pub fn search(&self, text: &str, lang: Language) -> Vec<&ArtworkRecord> {
        let needle = text.to_lowercase();
        self.records
            .iter()
            .filter(|r| needle.is_empty() || r.translation(lang).matches_lowercase(&needle))
            .collect()
    }

    /// Distinct categories in first-occurrence order.
    pub fn categories(&self) -> IndexSet<&str> {
        self.records.iter().map(|r| r.category.as_str()).collect()
    }

    /// Records flagged as featured.
    pub fn featured(&self) -> Vec<&ArtworkRecord> {
        self.records.iter().filter(|r| r.featured).collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let mut by_category: IndexMap<String, usize> = IndexMap::new();
        for record in &self.records {
            *by_category.entry(record.category.clone()).or_default() += 1;
        }

        let by_language = Language::ALL
            .into_iter()
            .map(|lang| {
                let count = self
                    .records
                    .iter()
                    .filter(|r| r.translations.get(lang).is_some())
                    .count();
                (lang, count)
            })
            .collect();

        CatalogStats {
            total: self.records.len(),
            featured: self.records.iter().filter(|r| r.featured).count(),
            by_category,
            by_language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogLoader;

    const FIXTURE: &str = r#"[
        {"id": "1", "scanCode": "QR-1", "imageUrl": "/1.jpg", "category": "Masks", "featured": true,
         "translations": {"fr": {"title": "Masque A", "origin": "Sénégal", "description": "Bois sculpté"}}},
        {"id": "2", "scanCode": "QR-2", "imageUrl": "/2.jpg", "category": "Textiles", "featured": false,
         "translations": {"fr": {"title": "Tissu B", "origin": "Ghana", "description": "Kente"},
                          "en": {"title": "Cloth B", "origin": "Ghana", "description": "Kente cloth"}}},
        {"id": "3", "scanCode": "QR-3", "imageUrl": "/3.jpg", "category": "Masks",
         "translations": {"fr": {"title": "Masque C", "origin": "Mali", "description": "Dogon"}}}
    ]"#;

    fn catalog() -> Catalog {
        CatalogLoader::new().load_str(FIXTURE, "fixture").unwrap()
    }

    fn ids(records: &[&ArtworkRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_get_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.get_by_id("2").unwrap().translations.fr.title, "Tissu B");
        assert!(catalog.get_by_id("99").is_none());
        assert!(catalog.get_by_id("").is_none());
    }

    #[test]
    fn test_get_by_scan_code() {
        let catalog = catalog();
        assert_eq!(catalog.get_by_scan_code("QR-3").unwrap().id, "3");
        assert_eq!(catalog.get_by_scan_code("  QR-1\n").unwrap().id, "1");
        assert!(catalog.get_by_scan_code("").is_none());
        assert!(catalog.get_by_scan_code("   ").is_none());
        // ids are not scan codes
        assert!(catalog.get_by_scan_code("1").is_none());
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = catalog();
        let masks = catalog.filter_by_category(&CategoryFilter::only("Masks"));
        assert_eq!(ids(&masks), vec!["1", "3"]);

        let all = catalog.filter_by_category(&CategoryFilter::All);
        assert_eq!(ids(&all), vec!["1", "2", "3"]);

        assert!(catalog
            .filter_by_category(&CategoryFilter::only("masks"))
            .is_empty());
    }

    #[test]
    fn test_search() {
        let catalog = catalog();
        assert_eq!(ids(&catalog.search("ghana", Language::Fr)), vec!["2"]);
        assert_eq!(ids(&catalog.search("MASQUE", Language::Fr)), vec!["1", "3"]);
        assert_eq!(ids(&catalog.search("dogon", Language::Fr)), vec!["3"]);
        assert_eq!(catalog.search("", Language::Wo).len(), 3);
        assert!(catalog.search("bronze", Language::Fr).is_empty());
    }

    #[test]
    fn test_search_uses_requested_language_with_fallback() {
        let catalog = catalog();
        // record 2 has English; the others fall back to French
        assert_eq!(ids(&catalog.search("cloth", Language::En)), vec!["2"]);
        assert!(catalog.search("tissu", Language::En).is_empty());
        assert_eq!(ids(&catalog.search("masque", Language::En)), vec!["1", "3"]);
    }

    #[test]
    fn test_categories() {
        let binding = catalog();
        let categories = binding.categories();
        assert_eq!(categories.len(), 2);
        assert!(categories.contains("Masks"));
        assert!(categories.contains("Textiles"));
    }

    #[test]
    fn test_featured() {
        let catalog = catalog();
        assert_eq!(ids(&catalog.featured()), vec!["1"]);
    }

    #[test]
    fn test_stats() {
        let stats = catalog().stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.featured, 1);
        assert_eq!(stats.by_category["Masks"], 2);
        assert_eq!(stats.by_category["Textiles"], 1);
        assert_eq!(stats.by_language[&Language::Fr], 3);
        assert_eq!(stats.by_language[&Language::En], 1);
        assert_eq!(stats.by_language[&Language::Wo], 0);
    }
}
