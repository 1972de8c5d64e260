pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::quiz::handlers as quiz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quiz API
        .route("/api/v1/questions", get(quiz::handle_get_questions))
        .route("/api/v1/submit", post(quiz::handle_submit))
        .route("/api/v1/results", get(quiz::handle_diagnostic_results))
        // Catalog API
        .route("/api/v1/catalog", get(matching::handle_catalog_summary))
        .with_state(state)
}
