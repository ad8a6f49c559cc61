use axum::{response::Redirect, routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::v1;

/// Create the API router: health probes and the v1 endpoints
pub fn create_router(state: AppState) -> Router {
    api_routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Create the API router plus the static dashboard page under `/ui`
pub fn create_router_with_ui(state: AppState, public_dir: &str) -> Router {
    let index = format!("{}/index.html", public_dir.trim_end_matches('/'));

    api_routes()
        .nest_service(
            "/ui",
            ServeDir::new(public_dir).fallback(ServeFile::new(index)),
        )
        .route("/", get(|| async { Redirect::permanent("/ui/") }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/v1", v1::create_v1_router())
}
