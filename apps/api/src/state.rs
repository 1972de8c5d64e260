use std::sync::Arc;

use crate::matching::catalog::Catalog;
use crate::matching::pipeline::EngineSettings;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; never reloaded per request.
    pub catalog: Arc<Catalog>,
    pub settings: EngineSettings,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: EngineSettings) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            settings,
        }
    }
}
