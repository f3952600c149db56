//! Category filter and combined catalog queries.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::artwork::{ArtworkRecord, Language};

use super::store::Catalog;

/// Sentinel label meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Restricts results to one category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn only(category: impl Into<String>) -> Self {
        CategoryFilter::Only(category.into())
    }

    /// Build a filter from a request label. `"all"` and the empty string
    /// mean no filtering; anything else is an exact category.
    pub fn parse(label: &str) -> Self {
        if label.is_empty() || label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    /// Whether `record` passes this filter.
    pub fn accepts(&self, record: &ArtworkRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

/// Category filter and free-text search applied together.
///
/// A record must pass both. Results keep catalog order; there is no ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub text: String,
    pub language: Language,
    /// Only return featured records.
    pub featured_only: bool,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn featured_only(mut self, featured_only: bool) -> Self {
        self.featured_only = featured_only;
        self
    }

    /// Run the query against `catalog`.
    pub fn run<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ArtworkRecord> {
        let needle = self.text.to_lowercase();
        catalog
            .records()
            .iter()
            .filter(|r| self.category.accepts(r))
            .filter(|r| !self.featured_only || r.featured)
            .filter(|r| needle.is_empty() || r.translation(self.language).matches_lowercase(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogLoader;

    const FIXTURE: &str = r#"[
        {"id": "1", "scanCode": "QR-1", "imageUrl": "/1.jpg", "category": "Masks", "featured": true,
         "translations": {"fr": {"title": "Masque A", "origin": "Sénégal"}}},
        {"id": "2", "scanCode": "QR-2", "imageUrl": "/2.jpg", "category": "Textiles",
         "translations": {"fr": {"title": "Tissu B", "origin": "Ghana"}}},
        {"id": "3", "scanCode": "QR-3", "imageUrl": "/3.jpg", "category": "Masks",
         "translations": {"fr": {"title": "Masque C", "origin": "Mali"}}}
    ]"#;

    fn catalog() -> Catalog {
        CatalogLoader::new().load_str(FIXTURE, "fixture").unwrap()
    }

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::only("All"));
        assert_eq!(
            "Masks".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::only("Masks")
        );
        assert_eq!(CategoryFilter::All.to_string(), "all");
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let catalog = catalog();
        assert_eq!(CatalogQuery::new().run(&catalog).len(), 3);
    }

    #[test]
    fn test_category_and_text_combine() {
        let catalog = catalog();
        let results = CatalogQuery::new()
            .category(CategoryFilter::only("Masks"))
            .text("mali")
            .run(&catalog);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);

        let none = CatalogQuery::new()
            .category(CategoryFilter::only("Textiles"))
            .text("masque")
            .run(&catalog);
        assert!(none.is_empty());
    }

    #[test]
    fn test_featured_only() {
        let catalog = catalog();
        let results = CatalogQuery::new()
            .category(CategoryFilter::only("Masks"))
            .featured_only(true)
            .run(&catalog);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }
}
