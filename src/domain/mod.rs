//! Domain layer - Readings, range selection and the prediction pipeline

pub mod error;
pub mod observation;
pub mod prediction;
pub mod range;

pub use error::DomainError;
pub use observation::{ObservationInput, ObservationValidationError};
pub use prediction::{
    FeatureTransform, PipelineMetadata, Presentation, PredictionPipeline, PredictionResult,
    Regressor, INPUT_FEATURES,
};
pub use range::{select_range, Bounds, LightCondition, RangeProfile};
