//! Catalog-wide handlers: health, categories, featured, stats.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use musee::{CatalogStats, Language};
use serde::Serialize;

use super::artworks::{ArtworkListResponse, LangParams};
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::view::ArtworkView;

/// Response for the health endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub artworks: usize,
    pub catalog: String,
    pub hash: String,
    pub assistant: Option<String>,
}

/// Response for the categories endpoint.
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let source = state.catalog().source();
    Json(HealthResponse {
        status: "ok",
        artworks: state.catalog().len(),
        catalog: source.origin.clone(),
        hash: source.hash.clone(),
        assistant: state.museum.assistant_name().map(str::to_string),
    })
}

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let categories = state
        .catalog()
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(CategoriesResponse { categories })
}

/// GET /api/featured
pub async fn list_featured(
    State(state): State<AppState>,
    params: Result<Query<LangParams>, QueryRejection>,
) -> Result<Json<ArtworkListResponse>, ApiError> {
    let Query(params) = params?;
    let language = Language::parse_or_default(params.lang.as_deref());
    let featured = state.catalog().featured();
    Ok(Json(ArtworkListResponse::new(
        ArtworkView::many(&featured, language),
        language,
    )))
}

/// GET /api/stats
pub async fn catalog_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(state.catalog().stats())
}
