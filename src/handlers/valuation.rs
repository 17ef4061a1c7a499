//! Valuation handler
//!
//! parse → validate → encode → predict. Each step fails with its own
//! [`ValuationError`] variant and the response shape follows from that.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::logic::features::encode;
use crate::logic::model::PredictionError;
use crate::logic::validation::{validate, ValidationResult};
use crate::models::{PredictionResponse, ValuationRequest};
use crate::{AppResult, AppState, ValuationError};

/// POST /predict
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<PredictionResponse>> {
    let Json(body) = payload.map_err(|e| ValuationError::InvalidBody(e.body_text()))?;
    tracing::debug!("Received valuation request: {}", body);

    let req = ValuationRequest::from_json(&body).map_err(|e| {
        tracing::warn!("Rejected valuation request: {}", e);
        e
    })?;

    if let ValidationResult::Invalid(details) = validate(&req) {
        tracing::warn!("Validation failed: {:?}", details);
        return Err(ValuationError::ValidationFailed(details));
    }

    let features = encode(&req)?;

    let predictor = state.predictor.as_ref().ok_or(PredictionError::NotLoaded)?;
    let predicted_price = predictor.predict(&features)?;

    tracing::info!(
        district = %req.district,
        town = %req.town.trim(),
        "Prediction success: {}",
        predicted_price
    );

    Ok(Json(PredictionResponse::new(predicted_price, features.as_slice().len())))
}
