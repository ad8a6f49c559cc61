//! Fitted model artifacts and their loader

mod linear;
mod loader;
mod polynomial;
mod scaler;

pub use linear::{LinearRegression, LinearRegressionSpec};
pub use loader::load_pipeline;
pub use polynomial::{PolynomialFeatures, PolynomialFeaturesSpec};
pub use scaler::{StandardScaler, StandardScalerSpec};

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory copies of the bundled `artifacts/` files

    use std::sync::Arc;

    use super::{LinearRegression, PolynomialFeatures, StandardScaler};
    use crate::domain::PredictionPipeline;

    pub const SAMPLE_SCALER_JSON: &str = r#"{
        "mean": [0.25, 25.0, 25.0],
        "scale": [0.25, 12.0, 3.5]
    }"#;

    pub const SAMPLE_EXPANDER_JSON: &str = r#"{
        "n_features_in": 3,
        "degree": 2,
        "include_bias": true
    }"#;

    pub const SAMPLE_MODEL_JSON: &str = r#"{
        "coef": [0.0, 312.5, -15.0, -1.75, 0.0, -15.0, -1.75, 0.0, 0.0, 0.0],
        "intercept": 312.5
    }"#;

    pub fn sample_pipeline() -> PredictionPipeline {
        let scaler: StandardScaler = serde_json::from_str(SAMPLE_SCALER_JSON).unwrap();
        let expander: PolynomialFeatures = serde_json::from_str(SAMPLE_EXPANDER_JSON).unwrap();
        let model: LinearRegression = serde_json::from_str(SAMPLE_MODEL_JSON).unwrap();

        PredictionPipeline::new(Arc::new(scaler), Arc::new(expander), Arc::new(model))
            .unwrap()
            .with_model_name("Polynomial Regression Model (Degree 2)")
    }
}
