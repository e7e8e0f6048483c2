//! Health check endpoint

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.service_name.clone(),
        version: state.version.clone(),
    })
}
