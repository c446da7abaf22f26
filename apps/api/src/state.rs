use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Live OpenAI client, or the canned client in mock mode.
    pub model: Arc<dyn ModelClient>,
}
