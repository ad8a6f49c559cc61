//! Request and response bodies for the dashboard endpoints

use serde::{Deserialize, Serialize};

use crate::domain::range::{
    IRRADIATION_DEFAULT, IRRADIATION_MAX, IRRADIATION_MIN, IRRADIATION_STEP, TEMPERATURE_STEP,
};
use crate::domain::{
    Bounds, LightCondition, ObservationInput, ObservationValidationError, Presentation,
    PredictionResult, RangeProfile,
};

/// POST /v1/predict body
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub irradiation: f64,
    pub module_temp: f64,
    pub ambient_temp: f64,
}

impl TryFrom<PredictRequest> for ObservationInput {
    type Error = ObservationValidationError;

    fn try_from(request: PredictRequest) -> Result<Self, Self::Error> {
        ObservationInput::new(request.irradiation, request.module_temp, request.ambient_temp)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub input: ObservationInput,
    pub condition: LightCondition,
    pub raw_value: f64,
    pub clamped_value: f64,
    pub presentation: Presentation,
}

impl PredictResponse {
    pub fn new(input: ObservationInput, result: PredictionResult, model_name: &str) -> Self {
        Self {
            input,
            condition: input.profile().condition,
            raw_value: result.raw_value,
            clamped_value: result.clamped_value,
            presentation: Presentation::new(&result, model_name),
        }
    }
}

/// GET /v1/ranges query
#[derive(Debug, Clone, Deserialize)]
pub struct RangesQuery {
    pub irradiation: Option<f64>,
}

/// Slider geometry for one input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl SliderSpec {
    fn temperature(bounds: Bounds) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
            default: bounds.default,
            step: TEMPERATURE_STEP,
        }
    }

    pub fn irradiation() -> Self {
        Self {
            min: IRRADIATION_MIN,
            max: IRRADIATION_MAX,
            default: IRRADIATION_DEFAULT,
            step: IRRADIATION_STEP,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RangesResponse {
    pub irradiation: f64,
    pub condition: LightCondition,
    pub label: &'static str,
    pub irradiation_slider: SliderSpec,
    pub module_temp: SliderSpec,
    pub ambient_temp: SliderSpec,
}

impl RangesResponse {
    pub fn new(irradiation: f64, profile: RangeProfile) -> Self {
        Self {
            irradiation,
            condition: profile.condition,
            label: profile.label,
            irradiation_slider: SliderSpec::irradiation(),
            module_temp: SliderSpec::temperature(profile.module_temp),
            ambient_temp: SliderSpec::temperature(profile.ambient_temp),
        }
    }
}
