use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use scribe::EpisodeForm;

use crate::db::drafts;
use crate::AppState;

pub async fn create_draft(State(state): State<AppState>, Json(form): Json<EpisodeForm>) -> impl IntoResponse {
    match drafts::create(&state.db, &form).await {
        Ok(id) => (StatusCode::CREATED, Json(json!({ "id": id }))).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

pub async fn get_draft(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match drafts::load(&state.db, &id).await {
        Ok(Some(draft)) => Json(draft).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Draft not found").into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

pub async fn save_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<EpisodeForm>,
) -> impl IntoResponse {
    match drafts::save(&state.db, &id, &form).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

pub async fn delete_draft(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match drafts::delete(&state.db, &id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, "Draft not found").into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
