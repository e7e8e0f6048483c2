//! API route handlers

pub mod drivers;
pub mod health;
pub mod races;
pub mod teams;
pub mod tracks;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::{AppState, ServiceKind};

/// Create the router for one service (or all of them)
pub fn create_router(kind: ServiceKind, state: AppState) -> Router {
    let catalog = match kind {
        ServiceKind::Drivers => drivers::router(),
        ServiceKind::Teams => teams::router(),
        ServiceKind::Tracks => tracks::router(),
        ServiceKind::Races => races::router(),
        ServiceKind::All => drivers::router()
            .merge(teams::router())
            .merge(tracks::router())
            .merge(races::router()),
    };

    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .merge(catalog)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

/// Any-origin CORS policy shared by the browser-facing catalogs
pub(crate) fn any_origin() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
