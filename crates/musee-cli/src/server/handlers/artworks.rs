//! Artwork list, detail and scan handlers.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use musee::{CatalogQuery, CategoryFilter, Language};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::view::ArtworkView;

/// Query string for the artwork list.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Category label, or "all".
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text search.
    #[serde(default)]
    pub q: Option<String>,
    /// Display language; unsupported codes fall back to French.
    #[serde(default)]
    pub lang: Option<String>,
    /// Only featured artworks.
    #[serde(default)]
    pub featured: bool,
}

/// Query string carrying only a language.
#[derive(Debug, Default, Deserialize)]
pub struct LangParams {
    #[serde(default)]
    pub lang: Option<String>,
}

/// Query string for scan resolution.
#[derive(Debug, Default, Deserialize)]
pub struct ScanParams {
    /// Decoded QR/barcode payload.
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub lang: Option<String>,
}

/// A list of artworks in one language.
#[derive(Serialize)]
pub struct ArtworkListResponse {
    pub language: Language,
    pub total: usize,
    pub artworks: Vec<ArtworkView>,
}

impl ArtworkListResponse {
    pub fn new(artworks: Vec<ArtworkView>, language: Language) -> Self {
        Self {
            language,
            total: artworks.len(),
            artworks,
        }
    }
}

/// GET /api/artworks
pub async fn list_artworks(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<ArtworkListResponse>, ApiError> {
    let Query(params) = params?;
    let language = Language::parse_or_default(params.lang.as_deref());
    let category = params
        .category
        .as_deref()
        .map(CategoryFilter::parse)
        .unwrap_or_default();

    let query = CatalogQuery::new()
        .category(category)
        .text(params.q.unwrap_or_default())
        .language(language)
        .featured_only(params.featured);

    let results = query.run(state.catalog());
    debug!(?query, hits = results.len(), "artwork query");

    Ok(Json(ArtworkListResponse::new(
        ArtworkView::many(&results, language),
        language,
    )))
}

/// GET /api/artworks/:id
pub async fn get_artwork(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<LangParams>, QueryRejection>,
) -> Result<Json<ArtworkView>, ApiError> {
    let Query(params) = params?;
    let language = Language::parse_or_default(params.lang.as_deref());
    let artwork = state
        .catalog()
        .get_by_id(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Artwork not found: {}", id)))?;

    Ok(Json(ArtworkView::new(artwork, language)))
}

/// GET /api/scan?code=
pub async fn scan_artwork(
    State(state): State<AppState>,
    params: Result<Query<ScanParams>, QueryRejection>,
) -> Result<Json<ArtworkView>, ApiError> {
    let Query(params) = params?;
    let language = Language::parse_or_default(params.lang.as_deref());
    let artwork = state
        .catalog()
        .get_by_scan_code(&params.code)
        .ok_or_else(|| {
            ApiError::NotFound(format!("No artwork for scan code: {}", params.code.trim()))
        })?;

    debug!(code = %params.code.trim(), id = %artwork.id, "scan resolved");
    Ok(Json(ArtworkView::new(artwork, language)))
}
