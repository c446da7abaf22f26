use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub const SERVICE_NAME: &str = "CareerHarvester Backend";

/// GET /api/health
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "model": state.model.model_name(),
        "mockMode": state.config.mock_mode,
    }))
}
