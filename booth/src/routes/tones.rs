use axum::{extract::State, response::Json};

use crate::AppState;

/// Tone names for the form's dropdown, built-in tones first.
pub async fn list_tones(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.tables.tones.names().map(str::to_string).collect())
}
