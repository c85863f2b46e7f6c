use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::json;

use scribe::core::samples;

use crate::routes::scripts::{compose_response, invalid_form};
use crate::AppState;

#[derive(Deserialize)]
pub struct SampleQuery {
    pub q: Option<String>,
}

pub async fn list_samples(Query(query): Query<SampleQuery>) -> impl IntoResponse {
    Json(samples::search(query.q.as_deref().unwrap_or("")))
}

pub async fn get_sample(Path(index): Path<usize>) -> impl IntoResponse {
    match samples::get(index) {
        Some(sample) => Json(sample.to_form()).into_response(),
        None => (StatusCode::NOT_FOUND, "No such sample").into_response(),
    }
}

pub async fn random_sample() -> impl IntoResponse {
    let (index, sample) = samples::random();
    Json(json!({ "index": index, "form": sample.to_form() }))
}

pub async fn preview_sample(State(state): State<AppState>, Path(index): Path<usize>) -> impl IntoResponse {
    let Some(sample) = samples::get(index) else {
        return (StatusCode::NOT_FOUND, "No such sample").into_response();
    };

    match sample.to_form().validate() {
        Ok(input) => compose_response(&state.tables, &input),
        Err(errors) => invalid_form(errors),
    }
}
