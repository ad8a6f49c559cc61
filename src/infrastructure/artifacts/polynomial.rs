//! Polynomial feature expansion

use ndarray::Array2;
use serde::Deserialize;

use crate::domain::{DomainError, FeatureTransform};

fn default_true() -> bool {
    true
}

/// Serialized form of the expander, as written by the training pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct PolynomialFeaturesSpec {
    pub n_features_in: usize,
    pub degree: u32,
    #[serde(default = "default_true")]
    pub include_bias: bool,
    #[serde(default)]
    pub interaction_only: bool,
}

/// Expands each row into all monomials of degree at most `degree`.
///
/// Column order: the bias column (when enabled), then every degree in
/// ascending order with its index combinations in lexicographic order.
/// For three features at degree 2 that is `1, a, b, c, a², ab, ac, b², bc, c²`.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "PolynomialFeaturesSpec")]
pub struct PolynomialFeatures {
    n_features_in: usize,
    degree: u32,
    /// Feature indices multiplied together for each output column
    terms: Vec<Vec<usize>>,
}

impl TryFrom<PolynomialFeaturesSpec> for PolynomialFeatures {
    type Error = DomainError;

    fn try_from(spec: PolynomialFeaturesSpec) -> Result<Self, Self::Error> {
        if spec.n_features_in == 0 {
            return Err(DomainError::schema("polynomial expander has no input features"));
        }

        if spec.degree == 0 {
            return Err(DomainError::schema("polynomial degree must be at least 1"));
        }

        let mut terms = Vec::new();

        if spec.include_bias {
            terms.push(Vec::new());
        }

        for degree in 1..=spec.degree as usize {
            push_combinations(
                spec.n_features_in,
                degree,
                0,
                !spec.interaction_only,
                &mut Vec::with_capacity(degree),
                &mut terms,
            );
        }

        Ok(Self {
            n_features_in: spec.n_features_in,
            degree: spec.degree,
            terms,
        })
    }
}

fn push_combinations(
    n_features: usize,
    remaining: usize,
    start: usize,
    with_replacement: bool,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if remaining == 0 {
        out.push(current.clone());
        return;
    }

    for index in start..n_features {
        current.push(index);
        let next = if with_replacement { index } else { index + 1 };
        push_combinations(n_features, remaining - 1, next, with_replacement, current, out);
        current.pop();
    }
}

impl PolynomialFeatures {
    pub fn new(n_features_in: usize, degree: u32, include_bias: bool) -> Result<Self, DomainError> {
        Self::try_from(PolynomialFeaturesSpec {
            n_features_in,
            degree,
            include_bias,
            interaction_only: false,
        })
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn terms(&self) -> &[Vec<usize>] {
        &self.terms
    }
}

impl FeatureTransform for PolynomialFeatures {
    fn n_features_in(&self) -> usize {
        self.n_features_in
    }

    fn n_features_out(&self) -> usize {
        self.terms.len()
    }

    fn transform(&self, features: &Array2<f64>) -> Result<Array2<f64>, DomainError> {
        if features.ncols() != self.n_features_in {
            return Err(DomainError::feature_shape(
                "polynomial expander",
                self.n_features_in,
                features.ncols(),
            ));
        }

        Ok(Array2::from_shape_fn(
            (features.nrows(), self.terms.len()),
            |(row, column)| {
                self.terms[column]
                    .iter()
                    .map(|&index| features[[row, index]])
                    .product::<f64>()
            },
        ))
    }
}
