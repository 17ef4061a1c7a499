//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::logic::model::PredictionError;

pub type AppResult<T> = Result<T, ValuationError>;

/// Request-scoped failures. None of these are fatal to the process.
#[derive(Debug, Error)]
pub enum ValuationError {
    // Body errors
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Invalid number format")]
    InvalidNumberFormat,

    // Business-rule errors
    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    // Encoding / prediction errors
    #[error("Expected {expected} features, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    #[error("{0}")]
    PredictionFailed(String),
}

impl ValuationError {
    pub fn status(&self) -> StatusCode {
        match self {
            ValuationError::InvalidBody(_)
            | ValuationError::MissingFields(_)
            | ValuationError::InvalidNumberFormat
            | ValuationError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ValuationError::FeatureCountMismatch { .. }
            | ValuationError::PredictionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ValuationError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            ValuationError::InvalidBody(msg) => {
                json!({ "error": "Invalid request body", "details": msg })
            }
            ValuationError::MissingFields(missing) => {
                json!({ "error": "Missing fields", "missing": missing })
            }
            ValuationError::InvalidNumberFormat => {
                json!({ "error": "Invalid number format" })
            }
            ValuationError::ValidationFailed(details) => {
                json!({ "error": "Validation failed", "details": details })
            }
            ValuationError::FeatureCountMismatch { .. } | ValuationError::PredictionFailed(_) => {
                tracing::error!("Prediction error: {}", self);
                json!({
                    "success": false,
                    "error": "Prediction failed",
                    "details": self.to_string()
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<PredictionError> for ValuationError {
    fn from(err: PredictionError) -> Self {
        ValuationError::PredictionFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ValuationError::InvalidNumberFormat.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ValuationError::MissingFields(vec!["town".into()]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ValuationError::ValidationFailed(vec![]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ValuationError::FeatureCountMismatch { expected: 247, actual: 246 }.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ValuationError::PredictionFailed("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_mismatch_message() {
        let err = ValuationError::FeatureCountMismatch { expected: 247, actual: 246 };
        assert_eq!(err.to_string(), "Expected 247 features, got 246");
    }

    #[test]
    fn test_prediction_error_keeps_message() {
        let err: ValuationError = PredictionError::NotLoaded.into();
        assert_eq!(err.to_string(), "Model not loaded");
    }
}
