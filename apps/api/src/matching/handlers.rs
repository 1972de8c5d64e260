use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogSummary {
    pub rows: usize,
    pub courses: usize,
}

/// GET /api/v1/catalog
pub async fn handle_catalog_summary(State(state): State<AppState>) -> Json<CatalogSummary> {
    Json(CatalogSummary {
        rows: state.catalog.len(),
        courses: state.catalog.course_count(),
    })
}
