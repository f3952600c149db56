//! Metadata about where a catalog was loaded from.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about the catalog source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSource {
    /// Human-readable origin ("bundled", a file name, or a caller label).
    pub origin: String,
    /// Full path when the catalog was read from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// SHA-256 hash of the source contents.
    pub hash: String,
    /// Source size in bytes.
    pub size_bytes: u64,
    /// Number of artwork records.
    pub record_count: usize,
    /// When the catalog was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl CatalogSource {
    /// Create metadata for a freshly loaded catalog.
    pub fn new(
        origin: impl Into<String>,
        path: Option<PathBuf>,
        hash: String,
        size_bytes: u64,
        record_count: usize,
    ) -> Self {
        Self {
            origin: origin.into(),
            path,
            hash,
            size_bytes,
            record_count,
            loaded_at: Utc::now(),
        }
    }
}
