//! Artwork catalog: loading, validation and read-only queries.
//!
//! # Example
//!
//! ```no_run
//! use musee::{CatalogLoader, CategoryFilter, Language};
//!
//! let catalog = CatalogLoader::new().load_path("artworks.json").unwrap();
//! let masks = catalog.filter_by_category(&CategoryFilter::only("Masks"));
//! let hits = catalog.search("ghana", Language::Fr);
//! println!("{} masks, {} search hits", masks.len(), hits.len());
//! ```

mod loader;
mod query;
mod source;
mod store;

pub use loader::{CatalogLoader, LoaderConfig, BUNDLED_ORIGIN};
pub use query::{CatalogQuery, CategoryFilter, ALL_CATEGORIES};
pub use source::CatalogSource;
pub use store::{Catalog, CatalogStats};
