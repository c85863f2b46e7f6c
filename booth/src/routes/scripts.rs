use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use scribe::core::export::{download_filename, ExportFormat};
use scribe::{
    render_markdown, render_markup, ComposeError, ContentTables, EpisodeForm, EpisodeInput, FormErrors,
    ScriptComposer,
};

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub script: String,
    pub html: String,
    pub markdown: String,
}

#[derive(Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
}

pub fn invalid_form(errors: FormErrors) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "errors": errors.errors }))).into_response()
}

fn compose_failed(err: ComposeError) -> Response {
    let body = json!({ "errors": [{ "field": "hosts", "message": err.to_string() }] });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

/// Compose and render without any simulated delay.
pub fn compose_response(tables: &ContentTables, input: &EpisodeInput) -> Response {
    match ScriptComposer::new(tables).compose(input) {
        Ok(script) => Json(ScriptResponse {
            html: render_markup(&script),
            markdown: render_markdown(&script),
            script,
        })
        .into_response(),
        Err(e) => compose_failed(e),
    }
}

pub async fn generate_script(
    State(state): State<AppState>,
    Json(form): Json<EpisodeForm>,
) -> impl IntoResponse {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return invalid_form(errors),
    };

    tokio::time::sleep(state.delay).await;

    tracing::debug!("generating '{}' ({} min)", input.episode_title, input.duration);
    compose_response(&state.tables, &input)
}

pub async fn export_script(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
    Json(form): Json<EpisodeForm>,
) -> impl IntoResponse {
    let format = match params.format.as_deref().map(str::parse::<ExportFormat>) {
        None => ExportFormat::Text,
        Some(Ok(format)) => format,
        Some(Err(e)) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return invalid_form(errors),
    };

    let script = match ScriptComposer::new(&state.tables).compose(&input) {
        Ok(script) => script,
        Err(e) => return compose_failed(e),
    };

    let body = format.render(&script, &input.episode_title);
    let filename = download_filename(&input.podcast_name, &input.episode_title, format);
    let content_type: mime::Mime = format.mime().parse().unwrap_or(mime::TEXT_PLAIN_UTF_8);

    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", filename)),
        ],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use sqlx::sqlite::SqlitePool;
    use std::sync::Arc;
    use std::time::Duration;

    fn state() -> AppState {
        AppState {
            db: SqlitePool::connect_lazy("sqlite::memory:").unwrap(),
            tables: Arc::new(ContentTables::builtin()),
            delay: Duration::ZERO,
        }
    }

    fn form() -> EpisodeForm {
        scribe::core::samples::SAMPLES[1].to_form()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn generate_returns_all_renderings() {
        let response = generate_script(State(state()), Json(form())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body["script"].as_str().unwrap().starts_with("🎙️ PODCAST SCRIPT"));
        assert!(body["html"].as_str().unwrap().contains("script-header"));
        assert!(body["markdown"].as_str().unwrap().starts_with("## PODCAST SCRIPT"));
    }

    #[tokio::test]
    async fn invalid_form_is_unprocessable() {
        let mut form = form();
        form.hosts = None;
        let response = generate_script(State(state()), Json(form)).await.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["field"], "hosts");
        assert_eq!(body["errors"][0]["message"], "Hosts is required");
    }

    #[tokio::test]
    async fn export_sets_attachment_headers() {
        let params = ExportParams {
            format: Some("markdown".to_string()),
        };
        let response = export_script(State(state()), Query(params), Json(form())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
        assert!(disposition.starts_with("attachment; filename=\"tech-talk-weekly-the-future-of-ai-in-healthcare-"));
        assert!(disposition.ends_with(".md\""));
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/markdown; charset=utf-8");
    }

    #[tokio::test]
    async fn export_rejects_unknown_format() {
        let params = ExportParams {
            format: Some("pdf".to_string()),
        };
        let response = export_script(State(state()), Query(params), Json(form())).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
