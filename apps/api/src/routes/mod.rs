pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::career::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/analyze-resume", post(handlers::handle_analyze_resume))
        .route("/api/search-jobs", post(handlers::handle_search_jobs))
        .route(
            "/api/analyze-job-match",
            post(handlers::handle_analyze_job_match),
        )
        .route(
            "/api/generate-cover-letter",
            post(handlers::handle_generate_cover_letter),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
