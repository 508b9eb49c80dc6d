use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::{Context, Result};
use axum::{Router, extract::FromRef};
use reqwest::Client;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::catalog::CatalogIndex;
use crate::config::Settings;

mod catalog;
mod config;
mod error;
mod i18n;
mod models;
mod options;
mod predictor;
mod pricing;
mod routes;

// Shared application state handed to the handlers.
#[derive(Clone, FromRef)]
struct AppState {
    settings: Arc<Settings>,
    http_client: Arc<Client>,
    catalog: Arc<CatalogIndex>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file first. Ignore errors (e.g., file not found)
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "velora=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Initializing Velora server...");

    // Load configuration
    let settings = match Settings::new() {
        Ok(s) => {
            tracing::info!("Configuration loaded successfully.");
            s
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };
    let shared_settings = Arc::new(settings);

    // Load the vehicle catalog once; it is immutable afterwards.
    let catalog = CatalogIndex::load(shared_settings.catalog_path.as_deref().map(Path::new))?;
    tracing::info!("Catalog loaded with {} brands.", catalog.brand_count());

    // Shared client for the external prediction service.
    let http_client = Arc::new(
        Client::builder()
            .build()
            .context("Failed to build shared reqwest client")?,
    );

    let app_state = AppState {
        settings: shared_settings.clone(),
        http_client,
        catalog: Arc::new(catalog),
    };

    let router: Router = routes::create_router(app_state.clone());

    // Combine the router with static file serving and request tracing.
    let app = router
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = app_state
        .settings
        .server_address
        .parse()
        .with_context(|| {
            format!(
                "Invalid server address format: {}",
                shared_settings.server_address
            )
        })?;

    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => {
            tracing::info!("Server listening on {}", addr);
            l
        }
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", addr, e);
            return Err(e.into());
        }
    };

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
