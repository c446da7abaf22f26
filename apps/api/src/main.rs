mod career;
mod config;
mod errors;
mod extract;
mod llm_client;
mod models;
mod normalize;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{CannedModelClient, ModelClient, OpenAiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerHarvester API v{}", env!("CARGO_PKG_VERSION"));

    let model = build_model_client(&config)?;
    info!("Model client initialized (model: {})", model.model_name());

    let state = AppState {
        config: config.clone(),
        model,
    };

    // CORS stays open: the SPA is served from a different origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Canned responses in mock mode, the live OpenAI client otherwise.
fn build_model_client(config: &Config) -> Result<Arc<dyn ModelClient>> {
    if config.mock_mode {
        warn!("MOCK_MODE is on: responses are canned fixtures");
        return Ok(Arc::new(CannedModelClient));
    }

    let client = OpenAiClient::new(
        config.openai_api_key.clone(),
        config.model.clone(),
        config.openai_base_url.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    Ok(Arc::new(client))
}
