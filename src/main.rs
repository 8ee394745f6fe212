// =============================================================================
// STOREFRONT SERVICE - Main Entry Point
// =============================================================================
// This is the main entry point for the marketplace storefront service.
//
// WHAT THIS SERVICE DOES:
// - Serves the product catalog behind the storefront page
// - Filters by business type, category, sub-category, vendor and status
// - Searches, sorts and paginates listings, with facet counts for the menus
// - Accepts new products
// - Exposes Prometheus metrics for observability
// =============================================================================

mod config; // Configuration loading (config.rs)
mod error; // Error types (error.rs)
mod facets; // Facet counting (facets.rs)
mod filter; // Filter criteria and search (filter.rs)
mod handlers; // HTTP request handlers (handlers.rs)
mod metrics; // Prometheus metrics setup (metrics.rs)
mod models; // Data structures (models.rs)
mod pagination; // Page slicing (pagination.rs)
mod service; // Listing pipeline (service.rs)
mod sort; // Sorting (sort.rs)
mod store; // In-memory product catalog (store.rs)

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::metrics::setup_metrics;
use crate::service::CatalogService;
use crate::store::InMemoryProductStore;

// -----------------------------------------------------------------------------
// APPLICATION STATE
// -----------------------------------------------------------------------------
// Shared by every request handler through `State<Arc<AppState>>`.
pub struct AppState {
    /// Product catalog and the listing pipeline on top of it
    pub catalog: CatalogService,

    /// Prometheus metrics handle, renders the /metrics body
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}

// -----------------------------------------------------------------------------
// ROUTES
// -----------------------------------------------------------------------------
/// Build the HTTP application with all routes and middleware.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // ----- Health & Metrics -----
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        // ----- Catalog API -----
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/search", get(handlers::search_products))
        // ----- Middleware Layers -----
        // The storefront UI is served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -------------------------------------------------------------------------
    // STEP 1: Load environment variables and initialize logging
    // -------------------------------------------------------------------------
    dotenvy::dotenv().ok();

    // RUST_LOG controls log levels, e.g. RUST_LOG=info,storefront_service=debug
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting Storefront Service...");

    // -------------------------------------------------------------------------
    // STEP 2: Load configuration and set up metrics
    // -------------------------------------------------------------------------
    let config = Config::from_env()?;
    info!(port = config.port, seed_file = ?config.seed_file, "Configuration loaded");

    let metrics_handle = setup_metrics()?;
    info!("Prometheus metrics initialized");

    // -------------------------------------------------------------------------
    // STEP 3: Seed the catalog
    // -------------------------------------------------------------------------
    let store = match &config.seed_file {
        Some(path) => InMemoryProductStore::from_json_file(path).await?,
        None => InMemoryProductStore::seeded(),
    };
    let catalog = CatalogService::new(Arc::new(store));

    let product_count = catalog.product_count().await;
    metrics::set_catalog_size(product_count);
    info!(products = product_count, "Catalog seeded");

    // -------------------------------------------------------------------------
    // STEP 4: Start the HTTP server
    // -------------------------------------------------------------------------
    let state = Arc::new(AppState {
        catalog,
        metrics_handle,
    });

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(address = %addr, "Storefront Service is listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Storefront Service stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
