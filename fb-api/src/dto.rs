//! Request and response bodies that are not catalog entities

use serde::{Deserialize, Serialize};

/// `?name=` query of the search endpoints
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

/// Health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
