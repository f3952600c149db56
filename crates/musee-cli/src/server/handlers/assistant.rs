//! Visitor assistant handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use musee::{Answer, Language};
use serde::Deserialize;
use tracing::info;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request to ask the assistant a question.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// The visitor's question.
    pub question: String,

    /// Answer language code; unsupported codes fall back to French.
    #[serde(default)]
    pub language: Option<String>,

    /// Artwork the question is about.
    #[serde(default)]
    pub artwork_id: Option<String>,
}

/// POST /api/assistant/ask
pub async fn ask_assistant(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<Answer>, ApiError> {
    let Json(req) = payload?;
    let question = req.question.trim().to_string();
    if question.is_empty() {
        return Err(ApiError::BadRequest("Question must not be empty".to_string()));
    }

    // Unsupported codes leave the museum default (French) in place.
    let language = req.language.as_deref().and_then(Language::parse);
    let museum = state.museum.clone();
    let artwork_id = req.artwork_id;

    // Hosted providers use blocking HTTP clients.
    let answer = tokio::task::spawn_blocking(move || {
        museum.ask(&question, language, artwork_id.as_deref())
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Assistant task failed: {}", e)))??;

    info!(provider = %answer.provider, language = %answer.language, "question answered");
    Ok(Json(answer))
}
