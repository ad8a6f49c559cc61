//! Prediction endpoint handler

use axum::extract::State;
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, PredictRequest, PredictResponse};
use crate::domain::ObservationInput;

/// POST /v1/predict
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    debug!(?request, "Prediction requested");

    let input = ObservationInput::try_from(request)?;
    let result = state.pipeline.predict_observation(&input)?;

    info!(
        irradiation = input.irradiation,
        module_temp = input.module_temp,
        ambient_temp = input.ambient_temp,
        power_kw = result.clamped_value,
        "Predicted power output"
    );

    Ok(Json(PredictResponse::new(
        input,
        result,
        state.pipeline.model_name(),
    )))
}
