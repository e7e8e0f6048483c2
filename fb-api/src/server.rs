//! API Server setup

use axum::Router;
use fb_store::CatalogServices;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::routes::create_router;
use crate::state::{ApiConfig, AppState};

/// Server bootstrap error
pub type ServerError = Box<dyn std::error::Error + Send + Sync>;

/// Create the API server
pub fn create_server(
    config: &ApiConfig,
    services: CatalogServices,
) -> Result<(Router, SocketAddr), ServerError> {
    let state = AppState::new(services, config.service);
    let router = create_router(config.service, state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    Ok((router, addr))
}

/// Run the API server until it fails
pub async fn run_server(config: ApiConfig, services: CatalogServices) -> Result<(), ServerError> {
    let (router, addr) = create_server(&config, services)?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        service = config.service.service_name(),
        "API server listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, router).await?;

    Ok(())
}

/// Start server in background (for testing)
pub async fn start_background_server(
    config: ApiConfig,
    services: CatalogServices,
) -> Result<SocketAddr, ServerError> {
    let (router, addr) = create_server(&config, services)?;

    // Bind to get actual address (useful when port is 0)
    let listener = TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
