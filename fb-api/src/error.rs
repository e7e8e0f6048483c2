//! API Error types

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fb_store::CatalogError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Rendered as a bare 404 with an empty body
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request body could not be read as the expected record
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl ApiError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        ApiError::NotFound(format!("{} {} not found", entity, id))
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(CatalogError::Duplicate { .. }) => StatusCode::CONFLICT,
            ApiError::Catalog(CatalogError::Validation(_)) => StatusCode::BAD_REQUEST,
        }
    }

    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Catalog(e) => e.code(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Absence is not an error condition for clients: no body
        if status == StatusCode::NOT_FOUND {
            return status.into_response();
        }

        tracing::debug!(error = %self, "request rejected");

        let message = match &self {
            ApiError::Catalog(e) => e.to_string(),
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg.clone(),
        };

        let body = ErrorResponse {
            error: message,
            code: self.error_code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_errors_map_to_client_errors() {
        let err = ApiError::from(CatalogError::duplicate("Race", "year=2024 round=1"));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "DUPLICATE_ENTITY");

        let err = ApiError::from(CatalogError::validation("Driver firstName must not be blank"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_has_empty_body() {
        let response = ApiError::not_found("Driver", 1).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get("content-type").is_none());
    }

    #[test]
    fn test_bad_request_has_json_body() {
        let response = ApiError::BadRequest("expected value".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}
