//! Ordinary least-squares regression with frozen coefficients

use ndarray::{Array1, Array2, ArrayView1};
use serde::Deserialize;

use crate::domain::{DomainError, Regressor};

/// Serialized form of the model, as written by the training pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct LinearRegressionSpec {
    pub coef: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

/// Fitted linear model: `x · coef + intercept`
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "LinearRegressionSpec")]
pub struct LinearRegression {
    coef: Vec<f64>,
    intercept: f64,
}

impl TryFrom<LinearRegressionSpec> for LinearRegression {
    type Error = DomainError;

    fn try_from(spec: LinearRegressionSpec) -> Result<Self, Self::Error> {
        if spec.coef.is_empty() {
            return Err(DomainError::schema("regression model has no coefficients"));
        }

        if !spec.intercept.is_finite() || spec.coef.iter().any(|c| !c.is_finite()) {
            return Err(DomainError::schema("regression coefficients must be finite"));
        }

        Ok(Self {
            coef: spec.coef,
            intercept: spec.intercept,
        })
    }
}

impl LinearRegression {
    pub fn new(coef: Vec<f64>, intercept: f64) -> Result<Self, DomainError> {
        Self::try_from(LinearRegressionSpec { coef, intercept })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coef
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Regressor for LinearRegression {
    fn n_features_in(&self) -> usize {
        self.coef.len()
    }

    fn predict(&self, features: &Array2<f64>) -> Result<Array1<f64>, DomainError> {
        if features.ncols() != self.coef.len() {
            return Err(DomainError::feature_shape(
                "regression model",
                self.coef.len(),
                features.ncols(),
            ));
        }

        Ok(features.dot(&ArrayView1::from(self.coef.as_slice())) + self.intercept)
    }
}
