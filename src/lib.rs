//! Property Valuation Service
//!
//! Accepts property attributes over HTTP and returns a predicted market
//! price (LKR) from a pre-trained regression model.
//!
//! # Architecture
//!
//! ```text
//!   POST /predict
//!        │
//!        ▼
//!   ┌──────────┐   ┌───────────┐   ┌──────────┐   ┌───────────┐
//!   │  parse   │──▶│ validate  │──▶│  encode  │──▶│ Predictor │
//!   │ (models) │   │  (rules)  │   │ (247 f64)│   │  (trait)  │
//!   └──────────┘   └───────────┘   └──────────┘   └───────────┘
//!        │ 400           │ 400           │ 500           │ 500
//!        └───────────────┴───────┬───────┴───────────────┘
//!                                ▼
//!                       ValuationError → JSON
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod models;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    http::{header::CONTENT_TYPE, HeaderValue, Method},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use error::{AppResult, ValuationError};

use logic::model::Predictor;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// `None` only in the degraded (monitoring/test) state
    pub predictor: Option<Arc<dyn Predictor>>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(predictor: Arc<dyn Predictor>, config: config::Config) -> Self {
        Self {
            predictor: Some(predictor),
            config,
        }
    }

    /// State without a model: `/health` reports it, `/predict` fails with 500.
    pub fn degraded(config: config::Config) -> Self {
        Self {
            predictor: None,
            config,
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.predictor.is_some()
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    // Browsers may call /predict only; /health is for probes
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/predict", post(handlers::valuation::predict).layer(cors))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::POST])
        .allow_headers([CONTENT_TYPE])
}
