//! Linear regression backend
//!
//! Artifact is the JSON export of the trained regressor:
//!
//! ```json
//! { "coefficients": [247 floats], "intercept": 1250000.0, "layout_hash": 305419896 }
//! ```
//!
//! `layout_hash` is optional; when present it must match the encoder layout.

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::Deserialize;

use super::inference::{ModelLoadError, ModelMetadata, PredictionError, Predictor};
use crate::logic::features::layout::{layout_hash, FEATURE_COUNT};
use crate::logic::features::FeatureVector;

#[derive(Debug, Deserialize)]
struct LinearArtifact {
    coefficients: Vec<f64>,
    intercept: f64,
    #[serde(default)]
    layout_hash: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct LinearModel {
    coefficients: Vec<f64>,
    intercept: f64,
    metadata: ModelMetadata,
}

impl LinearModel {
    /// Build from in-memory weights
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self, ModelLoadError> {
        Self::build(coefficients, intercept, "<memory>".to_string())
    }

    pub fn load(path: &Path) -> Result<Self, ModelLoadError> {
        let display = path.display().to_string();

        let raw = fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
            path: display.clone(),
            source,
        })?;

        let artifact: LinearArtifact = serde_json::from_str(&raw).map_err(|e| ModelLoadError::Parse {
            path: display.clone(),
            message: e.to_string(),
        })?;

        if let Some(actual) = artifact.layout_hash {
            let expected = layout_hash();
            if actual != expected {
                return Err(ModelLoadError::LayoutMismatch { expected, actual });
            }
        }

        let model = Self::build(artifact.coefficients, artifact.intercept, display)?;
        tracing::info!("Linear model loaded successfully ({} features)", FEATURE_COUNT);
        Ok(model)
    }

    fn build(coefficients: Vec<f64>, intercept: f64, model_path: String) -> Result<Self, ModelLoadError> {
        if coefficients.len() != FEATURE_COUNT {
            return Err(ModelLoadError::FeatureCount {
                expected: FEATURE_COUNT,
                actual: coefficients.len(),
            });
        }

        Ok(Self {
            coefficients,
            intercept,
            metadata: ModelMetadata {
                model_path,
                backend: "linear",
                features: FEATURE_COUNT,
                loaded_at: Utc::now(),
            },
        })
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let x = features.as_slice();
        if x.len() != self.coefficients.len() {
            return Err(PredictionError::Inference(format!(
                "X has {} features, but model is expecting {} features as input",
                x.len(),
                self.coefficients.len()
            )));
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(x)
            .map(|(w, x)| w * x)
            .sum();

        Ok(self.intercept + dot)
    }

    fn metadata(&self) -> ModelMetadata {
        self.metadata.clone()
    }
}
