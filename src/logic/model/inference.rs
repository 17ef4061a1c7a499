//! Predictor contract and artifact loading

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::logic::features::FeatureVector;

// ============================================================================
// ERRORS
// ============================================================================

/// Failure of a single prediction call
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Model not loaded")]
    NotLoaded,

    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Failure to bring a model up at startup. Fatal for the binary.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Model not found: {0}")]
    NotFound(String),

    #[error("Failed to read model {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Model expects {actual} features, encoder produces {expected}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("Model layout hash {actual:08x} does not match encoder layout {expected:08x}")]
    LayoutMismatch { expected: u32, actual: u32 },

    #[error("Backend '{0}' is not compiled in")]
    BackendDisabled(&'static str),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

// ============================================================================
// PREDICTOR TRAIT
// ============================================================================

/// Opaque trained regressor.
///
/// Implementations are constructed once, never mutated, and shared across
/// concurrent requests.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;

    fn metadata(&self) -> ModelMetadata;
}

/// Loaded model description for `/health` and startup logs
#[derive(Debug, Clone, Serialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub backend: &'static str,
    pub features: usize,
    pub loaded_at: DateTime<Utc>,
}

// ============================================================================
// LOADING
// ============================================================================

/// Load the artifact at `path`. `.onnx` selects ONNX Runtime, anything else
/// is read as a JSON linear model.
pub fn load_predictor(path: impl AsRef<Path>) -> Result<Arc<dyn Predictor>, ModelLoadError> {
    let path = path.as_ref();
    tracing::info!("Loading model from: {}", path.display());

    if !path.exists() {
        return Err(ModelLoadError::NotFound(path.display().to_string()));
    }

    let is_onnx = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("onnx"))
        .unwrap_or(false);

    if is_onnx {
        load_onnx(path)
    } else {
        Ok(Arc::new(super::linear::LinearModel::load(path)?))
    }
}

#[cfg(feature = "onnx")]
fn load_onnx(path: &Path) -> Result<Arc<dyn Predictor>, ModelLoadError> {
    Ok(Arc::new(super::onnx::OnnxModel::load(path)?))
}

#[cfg(not(feature = "onnx"))]
fn load_onnx(_path: &Path) -> Result<Arc<dyn Predictor>, ModelLoadError> {
    Err(ModelLoadError::BackendDisabled("onnx"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_message_prefixed_once() {
        let err = PredictionError::Inference("shape mismatch".to_string());
        assert_eq!(err.to_string(), "Inference failed: shape mismatch");
    }

    #[test]
    fn test_missing_artifact_is_not_found() {
        let err = load_predictor("/definitely/not/here/model.json").err().unwrap();
        assert!(matches!(err, ModelLoadError::NotFound(_)));
    }

    #[cfg(not(feature = "onnx"))]
    #[test]
    fn test_onnx_requires_feature() {
        let file = tempfile::Builder::new().suffix(".onnx").tempfile().unwrap();
        let err = load_predictor(file.path()).err().unwrap();
        assert!(matches!(err, ModelLoadError::BackendDisabled("onnx")));
    }
}
