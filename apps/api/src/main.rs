use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use riasec_api::config::Config;
use riasec_api::matching::catalog::{CatalogSource, CsvCatalogSource};
use riasec_api::routes::build_router;
use riasec_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on invalid values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("riasec_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting RIASEC API v{}", env!("CARGO_PKG_VERSION"));

    // Load the catalog once; a missing or malformed file stops startup
    let catalog = CsvCatalogSource::new(&config.catalog_path).load().await?;
    if catalog.is_empty() {
        tracing::warn!("Catalog is empty; every result will have no matches");
    }

    let settings = config.engine_settings();
    info!(
        "Policies: answers={:?} code={:?} threshold={} max_results={}",
        settings.answer_policy,
        settings.code_policy,
        settings.weights.threshold,
        settings.weights.max_results
    );

    let state = AppState::new(catalog, settings);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
