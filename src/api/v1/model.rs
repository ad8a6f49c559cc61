//! Artifact metadata endpoint

use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::Json;
use crate::domain::PipelineMetadata;

/// GET /v1/model
pub async fn get_model(State(state): State<AppState>) -> Json<PipelineMetadata> {
    Json(state.pipeline.metadata())
}
