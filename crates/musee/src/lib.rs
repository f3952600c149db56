//! Musee: artwork catalog and visitor assistant for a multilingual museum.
//!
//! The catalog is loaded once from a JSON file (or the bundled one) and is
//! read-only afterwards. Queries never fail: a miss is `None`, an empty
//! filter is an empty `Vec`. Only loading reports errors.
//!
//! # Core Principles
//!
//! - **French first**: every artwork has a French translation, used whenever
//!   the requested language is missing
//! - **Two keys**: `id` for navigation, `scan_code` for physical QR tags
//! - **Order preserving**: filters return records in catalog order
//!
//! # Example
//!
//! ```no_run
//! use musee::{CatalogLoader, CatalogQuery, CategoryFilter, Language};
//!
//! let catalog = CatalogLoader::new().load_bundled().unwrap();
//! let hits = CatalogQuery::new()
//!     .category(CategoryFilter::only("Masques"))
//!     .text("mali")
//!     .language(Language::En)
//!     .run(&catalog);
//!
//! for artwork in hits {
//!     println!("{}", artwork.translation(Language::En).title);
//! }
//! ```

pub mod artwork;
pub mod assistant;
pub mod catalog;
pub mod error;

mod museum;

pub use crate::museum::{Museum, MuseumConfig};
pub use artwork::{resolve_translation, ArtworkRecord, Language, Translation, Translations};
pub use assistant::{
    AnthropicProvider, Answer, AssistantConfig, AssistantProvider, GeminiProvider,
    KeywordResponder, KeywordRule, OpenAiProvider, Question, Responses,
};
pub use catalog::{
    Catalog, CatalogLoader, CatalogQuery, CatalogSource, CatalogStats, CategoryFilter,
    LoaderConfig, ALL_CATEGORIES,
};
pub use error::{MuseeError, Result};
