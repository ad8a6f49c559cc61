//! Loads the three fitted artifacts from disk and assembles the pipeline

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::{LinearRegression, PolynomialFeatures, StandardScaler};
use crate::config::ArtifactsConfig;
use crate::domain::{DomainError, FeatureTransform, PredictionPipeline, Regressor};

const SCALER: &str = "scaler";
const EXPANDER: &str = "polynomial expander";
const MODEL: &str = "regression model";

/// Load, validate and chain the artifacts named in the configuration.
///
/// Any missing, unreadable or mutually inconsistent artifact is an error;
/// callers treat it as fatal at startup.
pub fn load_pipeline(config: &ArtifactsConfig) -> Result<PredictionPipeline, DomainError> {
    let scaler: StandardScaler = load_json(SCALER, &config.scaler_path)?;
    let expander: PolynomialFeatures = load_json(EXPANDER, &config.expander_path)?;
    let model: LinearRegression = load_json(MODEL, &config.model_path)?;

    info!(
        scaler_features = scaler.n_features_in(),
        degree = expander.degree(),
        expanded_features = expander.n_features_out(),
        coefficients = model.n_features_in(),
        "Artifacts loaded"
    );

    let model_name = format!("Polynomial Regression Model (Degree {})", expander.degree());

    Ok(
        PredictionPipeline::new(Arc::new(scaler), Arc::new(expander), Arc::new(model))?
            .with_model_name(model_name),
    )
}

fn load_json<T: DeserializeOwned>(
    artifact: &str,
    path: impl AsRef<Path>,
) -> Result<T, DomainError> {
    let path = path.as_ref();
    debug!(artifact, path = %path.display(), "Loading artifact");

    let contents = std::fs::read_to_string(path).map_err(|e| {
        DomainError::artifact(artifact, format!("failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        DomainError::artifact(artifact, format!("failed to parse {}: {}", path.display(), e))
    })
}
