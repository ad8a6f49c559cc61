use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Feature shape mismatch at {stage}: expected {expected} features, got {actual}")]
    FeatureShape {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Artifact error ({artifact}): {message}")]
    Artifact { artifact: String, message: String },

    #[error("Schema error: {message}")]
    Schema { message: String },

    #[error("Prediction error: {message}")]
    Prediction { message: String },
}

impl DomainError {
    pub fn feature_shape(stage: &'static str, expected: usize, actual: usize) -> Self {
        Self::FeatureShape {
            stage,
            expected,
            actual,
        }
    }

    pub fn artifact(artifact: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Artifact {
            artifact: artifact.into(),
            message: message.into(),
        }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    pub fn prediction(message: impl Into<String>) -> Self {
        Self::Prediction {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_error() {
        let error = DomainError::prediction("model produced NaN");
        assert_eq!(error.to_string(), "Prediction error: model produced NaN");
    }

    #[test]
    fn test_feature_shape_error() {
        let error = DomainError::feature_shape("scaler", 3, 2);
        assert_eq!(
            error.to_string(),
            "Feature shape mismatch at scaler: expected 3 features, got 2"
        );
    }

    #[test]
    fn test_artifact_error() {
        let error = DomainError::artifact("scaler", "file not found");
        assert_eq!(error.to_string(), "Artifact error (scaler): file not found");
    }
}
