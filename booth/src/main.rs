use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scribe::core::config::{load_config, Config};
use scribe::ContentTables;

mod db;
mod routes;

use db::DbPool;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub tables: Arc<ContentTables>,
    /// Simulated generation latency applied before each compose.
    pub delay: Duration,
}

fn load_settings() -> Result<(ContentTables, Duration)> {
    let config = match std::env::var("SCRIBE_CONFIG") {
        Ok(path) => load_config(&path).with_context(|| format!("loading {}", path))?,
        Err(_) => Config::default(),
    };

    let delay = match std::env::var("GENERATION_DELAY_MS") {
        Ok(ms) => Duration::from_millis(ms.parse().context("GENERATION_DELAY_MS must be milliseconds")?),
        Err(_) => config.generation.delay(),
    };

    Ok((ContentTables::from_config(&config), delay))
}

pub fn router(state: AppState, static_dir: &str) -> Router {
    let static_index = format!("{}/index.html", static_dir);

    Router::new()
        .route("/api/tones", get(routes::tones::list_tones))
        .route("/api/samples", get(routes::samples::list_samples))
        .route("/api/samples/random", get(routes::samples::random_sample))
        .route("/api/samples/{index}", get(routes::samples::get_sample))
        .route("/api/samples/{index}/preview", get(routes::samples::preview_sample))
        .route("/api/scripts", post(routes::scripts::generate_script))
        .route("/api/scripts/export", post(routes::scripts::export_script))
        .route("/api/drafts", post(routes::drafts::create_draft))
        .route(
            "/api/drafts/{id}",
            get(routes::drafts::get_draft)
                .put(routes::drafts::save_draft)
                .delete(routes::drafts::delete_draft),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir).not_found_service(ServeFile::new(static_index)))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "booth=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (tables, delay) = load_settings()?;
    let db_pool = db::init_db().await.context("Failed to initialize DB")?;

    let state = AppState {
        db: db_pool,
        tables: Arc::new(tables),
        delay,
    };

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "dist/frontend".to_string());
    let app = router(state, &static_dir);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8899".to_string()).parse::<u16>().unwrap_or(8899);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {} (generation delay {:?})", addr, delay);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
