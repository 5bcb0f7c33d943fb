pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers as evaluation;
use crate::extraction::handlers as extraction;
use crate::state::AppState;
use crate::ui::handlers as ui;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Browser flow
        .route("/", get(ui::handle_index))
        .route("/upload", post(ui::handle_upload))
        .route("/analyze", post(ui::handle_analyze))
        // JSON API
        .route("/api/v1/extract", post(extraction::handle_extract))
        .route("/api/v1/evaluations", post(evaluation::handle_evaluate))
        .route(
            "/api/v1/evaluations/structured",
            post(evaluation::handle_evaluate_structured),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
