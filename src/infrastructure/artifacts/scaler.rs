//! Standard scaler - per-column affine normalization with frozen statistics

use ndarray::{Array1, Array2, ArrayView1};
use serde::Deserialize;

use crate::domain::{DomainError, FeatureTransform};

fn default_true() -> bool {
    true
}

/// Serialized form of the scaler, as written by the training pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScalerSpec {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
    #[serde(default = "default_true")]
    pub with_mean: bool,
    #[serde(default = "default_true")]
    pub with_std: bool,
}

/// Fitted standard scaler: `(x - mean) / scale`
///
/// Only constructed through [`TryFrom<StandardScalerSpec>`], so `mean` and
/// `scale` always have the same non-zero length.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "StandardScalerSpec")]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
    with_mean: bool,
    with_std: bool,
}

impl TryFrom<StandardScalerSpec> for StandardScaler {
    type Error = DomainError;

    /// A zero scale marks a constant feature during fitting and divides by
    /// one instead.
    fn try_from(spec: StandardScalerSpec) -> Result<Self, Self::Error> {
        if spec.mean.is_empty() {
            return Err(DomainError::schema("scaler has no features"));
        }

        if spec.mean.len() != spec.scale.len() {
            return Err(DomainError::schema(format!(
                "scaler mean has {} entries but scale has {}",
                spec.mean.len(),
                spec.scale.len()
            )));
        }

        if spec.mean.iter().chain(spec.scale.iter()).any(|v| !v.is_finite()) {
            return Err(DomainError::schema("scaler statistics must be finite"));
        }

        Ok(Self {
            mean: spec.mean,
            scale: spec.scale,
            with_mean: spec.with_mean,
            with_std: spec.with_std,
        })
    }
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, DomainError> {
        Self::try_from(StandardScalerSpec {
            mean,
            scale,
            with_mean: true,
            with_std: true,
        })
    }

    fn effective_scale(&self) -> Array1<f64> {
        self.scale
            .iter()
            .map(|&s| if s == 0.0 { 1.0 } else { s })
            .collect()
    }
}

impl FeatureTransform for StandardScaler {
    fn n_features_in(&self) -> usize {
        self.mean.len()
    }

    fn n_features_out(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, features: &Array2<f64>) -> Result<Array2<f64>, DomainError> {
        if features.ncols() != self.n_features_in() {
            return Err(DomainError::feature_shape(
                "scaler",
                self.n_features_in(),
                features.ncols(),
            ));
        }

        let mut scaled = features.clone();

        if self.with_mean {
            scaled -= &ArrayView1::from(self.mean.as_slice());
        }

        if self.with_std {
            scaled /= &self.effective_scale();
        }

        Ok(scaled)
    }
}
