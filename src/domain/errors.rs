use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Shared underlying cause of a load failure.
///
/// Load outcomes are cached for the process lifetime, so the cause must be
/// cheap to clone.
pub type LoadCause = Arc<dyn std::error::Error + Send + Sync>;

/// Errors raised while loading the deployment artifact
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("The pricing model is missing: no artifact found at {path}. Place the trained bundle there and restart.")]
    MissingArtifact { path: PathBuf },

    #[error("The pricing model at {path} could not be loaded: {source}")]
    CorruptArtifact {
        path: PathBuf,
        #[source]
        source: LoadCause,
    },
}

impl LoadError {
    pub fn corrupt<E>(path: impl Into<PathBuf>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        LoadError::CorruptArtifact {
            path: path.into(),
            source: Arc::new(cause),
        }
    }
}

/// Internal inconsistencies found in an otherwise well-formed bundle
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("Scaler has {names} feature names but {params} {param} values")]
    ScalerShape {
        names: usize,
        params: usize,
        param: &'static str,
    },

    #[error("Label encoder has no classes")]
    EmptyEncoder,

    #[error("Label encoder class '{class}' appears more than once")]
    DuplicateClass { class: String },

    #[error("Feature order is empty")]
    EmptyFeatureOrder,

    #[error("Feature '{name}' appears more than once in the feature order")]
    DuplicateFeature { name: String },
}

/// Errors raised by a single prediction request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Unknown borough '{value}'. Known boroughs: {}", .known.join(", "))]
    UnknownCategory { value: String, known: Vec<String> },

    #[error("Feature mismatch between artifact and pipeline: {reason}")]
    FeatureMismatch { reason: String },

    #[error("Model inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_message_names_path() {
        let error = LoadError::MissingArtifact {
            path: PathBuf::from("minoai_deployment_v1.json"),
        };

        let msg = error.to_string();
        assert!(msg.contains("missing"));
        assert!(msg.contains("minoai_deployment_v1.json"));
    }

    #[test]
    fn test_corrupt_artifact_keeps_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = LoadError::corrupt("bundle.json", cause);

        assert!(error.to_string().contains("bundle.json"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_unknown_category_lists_known_values() {
        let error = PredictionError::UnknownCategory {
            value: "Atlantis".to_string(),
            known: vec!["Bronx".to_string(), "Queens".to_string()],
        };

        let msg = error.to_string();
        assert!(msg.contains("Atlantis"));
        assert!(msg.contains("Bronx, Queens"));
    }
}
