//! Scaler -> polynomial expander -> regression model -> clamp

use std::sync::Arc;

use ndarray::{Array1, Array2};
use serde::Serialize;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

use super::result::PredictionResult;
use crate::domain::error::DomainError;
use crate::domain::observation::ObservationInput;

/// Width of the raw feature row: irradiation, module temp, ambient temp
pub const INPUT_FEATURES: usize = 3;

const DEFAULT_MODEL_NAME: &str = "Regression Model";

/// A fitted, read-only transformation of a feature matrix
#[cfg_attr(test, automock)]
pub trait FeatureTransform: Send + Sync {
    /// Number of columns the transform accepts
    fn n_features_in(&self) -> usize;

    /// Number of columns the transform produces
    fn n_features_out(&self) -> usize;

    /// Transform every row. Fails when the column count differs from
    /// [`FeatureTransform::n_features_in`].
    fn transform(&self, features: &Array2<f64>) -> Result<Array2<f64>, DomainError>;
}

/// A fitted regressor producing one value per row
#[cfg_attr(test, automock)]
pub trait Regressor: Send + Sync {
    fn n_features_in(&self) -> usize;

    fn predict(&self, features: &Array2<f64>) -> Result<Array1<f64>, DomainError>;
}

/// Shape summary of the loaded artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineMetadata {
    pub model_name: String,
    pub input_features: usize,
    pub scaled_features: usize,
    pub expanded_features: usize,
}

/// The fitted artifacts, loaded once and shared read-only by every request.
///
/// Holds no mutable state: identical inputs always give identical outputs.
#[derive(Clone)]
pub struct PredictionPipeline {
    scaler: Arc<dyn FeatureTransform>,
    expander: Arc<dyn FeatureTransform>,
    model: Arc<dyn Regressor>,
    model_name: String,
}

impl std::fmt::Debug for PredictionPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionPipeline")
            .field("metadata", &self.metadata())
            .finish()
    }
}

impl PredictionPipeline {
    /// Assemble a pipeline, checking that each stage's output width matches
    /// the next stage's input width.
    pub fn new(
        scaler: Arc<dyn FeatureTransform>,
        expander: Arc<dyn FeatureTransform>,
        model: Arc<dyn Regressor>,
    ) -> Result<Self, DomainError> {
        if scaler.n_features_in() != INPUT_FEATURES {
            return Err(DomainError::schema(format!(
                "scaler expects {} features, inputs provide {}",
                scaler.n_features_in(),
                INPUT_FEATURES
            )));
        }

        if expander.n_features_in() != scaler.n_features_out() {
            return Err(DomainError::schema(format!(
                "polynomial expander expects {} features, scaler produces {}",
                expander.n_features_in(),
                scaler.n_features_out()
            )));
        }

        if model.n_features_in() != expander.n_features_out() {
            return Err(DomainError::schema(format!(
                "regression model expects {} features, polynomial expander produces {}",
                model.n_features_in(),
                expander.n_features_out()
            )));
        }

        Ok(Self {
            scaler,
            expander,
            model,
            model_name: DEFAULT_MODEL_NAME.to_string(),
        })
    }

    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn metadata(&self) -> PipelineMetadata {
        PipelineMetadata {
            model_name: self.model_name.clone(),
            input_features: self.scaler.n_features_in(),
            scaled_features: self.scaler.n_features_out(),
            expanded_features: self.expander.n_features_out(),
        }
    }

    pub fn predict(
        &self,
        irradiation: f64,
        module_temp: f64,
        ambient_temp: f64,
    ) -> Result<PredictionResult, DomainError> {
        self.predict_row(&[irradiation, module_temp, ambient_temp])
    }

    pub fn predict_observation(
        &self,
        input: &ObservationInput,
    ) -> Result<PredictionResult, DomainError> {
        self.predict_row(&input.features())
    }

    /// Run a raw feature row through every stage. A row of the wrong width
    /// is an error, never a default value.
    pub fn predict_row(&self, features: &[f64]) -> Result<PredictionResult, DomainError> {
        if features.len() != INPUT_FEATURES {
            return Err(DomainError::feature_shape(
                "input",
                INPUT_FEATURES,
                features.len(),
            ));
        }

        let row = Array2::from_shape_vec((1, features.len()), features.to_vec())
            .map_err(|e| DomainError::prediction(e.to_string()))?;

        let scaled = self.scaler.transform(&row)?;
        let expanded = self.expander.transform(&scaled)?;
        let output = self.model.predict(&expanded)?;

        let raw = output
            .first()
            .copied()
            .ok_or_else(|| DomainError::prediction("regression model returned no output"))?;

        if !raw.is_finite() {
            return Err(DomainError::prediction(format!(
                "regression model returned non-finite value {}",
                raw
            )));
        }

        let result = PredictionResult::from_raw(raw);
        debug!(
            ?features,
            raw = result.raw_value,
            clamped = result.clamped_value,
            "Prediction complete"
        );

        Ok(result)
    }
}
