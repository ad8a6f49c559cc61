//! Dashboard v1 API endpoints

pub mod model;
pub mod predict;
pub mod ranges;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/predict", post(predict::predict))
        .route("/ranges", get(ranges::get_ranges))
        .route("/model", get(model::get_model))
}
