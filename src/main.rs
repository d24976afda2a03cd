// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_app_config;
use crate::presentation::app_state::AppState;
use crate::presentation::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_app_config()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    // Validate the device dataset before serving anything
    let dataset = config.dataset()?;

    // Create services (application layer)
    let dashboard_service = DashboardService::new(dataset, config.credentials.clone());
    tracing::info!(
        devices = dashboard_service.dataset().len(),
        "device dataset loaded"
    );

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = router::build(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_target()).await?;
    tracing::info!(addr = %listener.local_addr()?, "starting battery dashboard");

    axum::serve(listener, router).await?;

    Ok(())
}
