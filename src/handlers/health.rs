//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::logic::features::LayoutInfo;
use crate::logic::model::ModelMetadata;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub ready: bool,
    pub version: &'static str,
    pub layout: LayoutInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelMetadata>,
    pub timestamp: i64,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model = state.predictor.as_ref().map(|p| p.metadata());
    let loaded = model.is_some();

    Json(HealthResponse {
        status: if loaded { "healthy" } else { "degraded" },
        model_loaded: loaded,
        ready: loaded,
        version: env!("CARGO_PKG_VERSION"),
        layout: LayoutInfo::current(),
        model,
        timestamp: chrono::Utc::now().timestamp(),
    })
}
