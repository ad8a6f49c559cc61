//! Prediction domain - the inference pipeline contract and its output

mod pipeline;
mod presenter;
mod result;

pub use pipeline::{
    FeatureTransform, PipelineMetadata, PredictionPipeline, Regressor, INPUT_FEATURES,
};
pub use presenter::{format_power, Presentation, MODEL_SCOPE_DISCLAIMER, POWER_UNIT};
pub use result::{clamp_power, PredictionResult};
