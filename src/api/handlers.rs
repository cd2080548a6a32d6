use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{Mood, MovieSummary};
use crate::services::{classifier, resolver};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub mood: Mood,
}

#[derive(Debug, Deserialize)]
pub struct MoviesQuery {
    pub mood: Option<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Classify free text into a mood label
///
/// Transport failures of the model call surface as a 500 with details; a
/// reply outside the mood set is silently defaulted (and logged) instead.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> AppResult<Json<AnalyzeResponse>> {
    let classification = classifier::classify(state.language_model.as_ref(), &request.message)
        .await
        .map_err(|e| AppError::Classification(e.to_string()))?;

    Ok(Json(AnalyzeResponse {
        mood: classification.mood(),
    }))
}

/// Resolve a mood into a bounded movie list
///
/// The only explicit failure is a missing `mood` parameter; collaborator
/// failures come back as an empty array with 200.
pub async fn movies(
    State(state): State<AppState>,
    Query(params): Query<MoviesQuery>,
) -> AppResult<Json<Vec<MovieSummary>>> {
    let mood = params
        .mood
        .ok_or_else(|| AppError::InvalidInput("Mood parameter is required".to_string()))?;

    let movies = resolver::resolve(
        state.movie_catalog.clone(),
        state.page_sampler.clone(),
        &mood,
    )
    .await;

    Ok(Json(movies))
}
