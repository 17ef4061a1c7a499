//! Model Module - trained price predictor
//!
//! The handler only sees [`Predictor`]; backends are picked at startup
//! from the artifact's file extension.

pub mod inference;
pub mod linear;
#[cfg(feature = "onnx")]
pub mod onnx;

pub use inference::{load_predictor, ModelLoadError, ModelMetadata, PredictionError, Predictor};
pub use linear::LinearModel;
#[cfg(feature = "onnx")]
pub use onnx::OnnxModel;
