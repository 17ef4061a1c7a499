//! Property Valuation Server
//!
//! Loads the predictor once, then serves `/predict` and `/health`.
//! A model that fails to load stops startup.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use valuation_service::{
    config::Config,
    create_router,
    logic::{features::LayoutInfo, model::load_predictor},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "valuation_service=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Valuation server starting ({})...", config.environment);

    let layout = LayoutInfo::current();
    tracing::info!(
        "Feature layout v{} ({} features, hash {:08x})",
        layout.version, layout.feature_count, layout.hash
    );

    // No degraded mode: refuse to serve without a model
    let predictor = load_predictor(&config.model_path)
        .with_context(|| format!("Failed to load ML model from {}", config.model_path))?;

    let metadata = predictor.metadata();
    tracing::info!("✅ Model loaded: {} ({})", metadata.model_path, metadata.backend);

    let addr = SocketAddr::new(config.host, config.port);
    let state = AppState::new(predictor, config);
    let app = create_router(state);

    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
