//! Catalog loading and validation.
//!
//! The catalog is read once at startup. Any shape problem aborts the load:
//! a partially valid catalog is never produced.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::artwork::ArtworkRecord;
use crate::error::{MuseeError, Result};

use super::source::CatalogSource;
use super::store::Catalog;

/// The catalog compiled into the library.
const BUNDLED_CATALOG: &str = include_str!("../../data/artworks.json");

/// Origin label used for the bundled catalog.
pub const BUNDLED_ORIGIN: &str = "bundled";

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Reject duplicate ids and scan codes. When false, duplicates are kept
    /// and lookups return the first occurrence.
    pub strict: bool,
    /// Accept a source with no records.
    pub allow_empty: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            strict: true,
            allow_empty: false,
        }
    }
}

/// Loads and validates artwork catalogs.
pub struct CatalogLoader {
    config: LoaderConfig,
}

impl CatalogLoader {
    /// Create a loader with default (strict) configuration.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a catalog from a JSON file.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Catalog> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| MuseeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let origin = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let (records, mut source) = self.parse(&contents, &origin)?;
        source.path = Some(path.to_path_buf());
        info!(path = %path.display(), records = records.len(), "catalog loaded");
        Ok(Catalog::new(records, source))
    }

    /// Load a catalog from a JSON string. `origin` labels it in errors and metadata.
    pub fn load_str(&self, json: &str, origin: &str) -> Result<Catalog> {
        let (records, source) = self.parse(json, origin)?;
        debug!(origin, records = records.len(), "catalog loaded from string");
        Ok(Catalog::new(records, source))
    }

    /// Load the catalog compiled into the library.
    pub fn load_bundled(&self) -> Result<Catalog> {
        self.load_str(BUNDLED_CATALOG, BUNDLED_ORIGIN)
    }

    fn parse(&self, json: &str, origin: &str) -> Result<(Vec<ArtworkRecord>, CatalogSource)> {
        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        let hash = format!("sha256:{:x}", hasher.finalize());

        let document: Value = serde_json::from_str(json)?;
        let Value::Array(elements) = document else {
            return Err(MuseeError::Malformed {
                origin: origin.to_string(),
                message: format!("expected a JSON array, found {}", json_kind(&document)),
            });
        };

        if elements.is_empty() && !self.config.allow_empty {
            return Err(MuseeError::EmptyCatalog(format!(
                "'{}' contains no artworks",
                origin
            )));
        }

        let mut records = Vec::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            let mut record: ArtworkRecord =
                serde_json::from_value(element).map_err(|e| MuseeError::Malformed {
                    origin: origin.to_string(),
                    message: format!("artwork at index {}: {}", index, e),
                })?;
            normalize_scan_code(&mut record);
            validate_record(index, &record)?;
            records.push(record);
        }

        check_uniqueness(&records, self.config.strict)?;

        let source = CatalogSource::new(origin, None, hash, json.len() as u64, records.len());
        Ok((records, source))
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Scan lookups trim the payload, so stored codes are trimmed to match.
fn normalize_scan_code(record: &mut ArtworkRecord) {
    let trimmed = record.scan_code.trim();
    if trimmed.len() != record.scan_code.len() {
        debug!(id = %record.id, code = %record.scan_code, "trimmed scan code");
        record.scan_code = trimmed.to_string();
    }
}

fn validate_record(index: usize, record: &ArtworkRecord) -> Result<()> {
    let required = [
        ("id", &record.id),
        ("scanCode", &record.scan_code),
        ("category", &record.category),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(MuseeError::EmptyField { index, field });
        }
    }

    if record.translations.fr.title.trim().is_empty() {
        return Err(MuseeError::MissingTranslation {
            index,
            id: record.id.clone(),
        });
    }

    Ok(())
}

fn check_uniqueness(records: &[ArtworkRecord], strict: bool) -> Result<()> {
    let mut ids: HashMap<&str, usize> = HashMap::new();
    let mut codes: HashMap<&str, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        if let Some(&first) = ids.get(record.id.as_str()) {
            if strict {
                return Err(MuseeError::DuplicateId {
                    id: record.id.clone(),
                    first,
                    second: index,
                });
            }
            debug!(id = %record.id, first, second = index, "duplicate artwork id kept");
        } else {
            ids.insert(&record.id, index);
        }

        if let Some(&first) = codes.get(record.scan_code.as_str()) {
            if strict {
                return Err(MuseeError::DuplicateScanCode {
                    code: record.scan_code.clone(),
                    first,
                    second: index,
                });
            }
            debug!(code = %record.scan_code, first, second = index, "duplicate scan code kept");
        } else {
            codes.insert(&record.scan_code, index);
        }
    }

    Ok(())
}
