//! ONNX Runtime backend
//!
//! Expects an exported regressor with one `[1, 247]` float input and a
//! scalar (or `[1, 1]`) float output.

use std::path::Path;

use chrono::Utc;
use ndarray::Array2;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Value;
use parking_lot::Mutex;

use super::inference::{ModelLoadError, ModelMetadata, PredictionError, Predictor};
use crate::logic::features::{FeatureVector, FEATURE_COUNT};

pub struct OnnxModel {
    /// `Session::run` needs exclusive access
    session: Mutex<Session>,
    output_name: String,
    metadata: ModelMetadata,
}

impl OnnxModel {
    pub fn load(path: &Path) -> Result<Self, ModelLoadError> {
        tracing::info!("Loading ONNX model from: {}", path.display());

        let session = Session::builder()
            .map_err(|e| ModelLoadError::Runtime(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelLoadError::Runtime(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| ModelLoadError::Runtime(format!("Failed to load model: {}", e)))?;

        let output_name = session.outputs.first()
            .map(|o| o.name.clone())
            .ok_or_else(|| ModelLoadError::Runtime("No output defined".to_string()))?;

        tracing::info!("ONNX model loaded successfully");

        Ok(Self {
            session: Mutex::new(session),
            output_name,
            metadata: ModelMetadata {
                model_path: path.display().to_string(),
                backend: "onnx",
                features: FEATURE_COUNT,
                loaded_at: Utc::now(),
            },
        })
    }
}

impl Predictor for OnnxModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.to_f32())
            .map_err(|e| PredictionError::Inference(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| PredictionError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session.run(ort::inputs![input_tensor])
            .map_err(|e| PredictionError::Inference(e.to_string()))?;

        let output = outputs.get(&self.output_name)
            .ok_or_else(|| PredictionError::Inference("No output".to_string()))?;

        let (_, data) = output.try_extract_tensor::<f32>()
            .map_err(|e| PredictionError::Inference(format!("Extract error: {}", e)))?;

        data.first()
            .map(|v| *v as f64)
            .ok_or_else(|| PredictionError::Inference("Empty output".to_string()))
    }

    fn metadata(&self) -> ModelMetadata {
        self.metadata.clone()
    }
}
