//! CLI Error Types

use fb_client::ClientError;
use fb_store::CatalogError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Remote service could not be reached
    #[error("Connection error: {message}")]
    ConnectionError { message: String },

    /// Remote service answered with a failure status
    #[error("API request failed: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Remote response could not be decoded
    #[error("Invalid response: {message}")]
    DecodeError { message: String },

    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Catalog store error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    /// Remote record not found
    #[error("Not found: {what}")]
    NotFound { what: String },

    /// Server error
    #[error("Server error: {message}")]
    ServerError { message: String },
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        CliError::ConfigError {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_arg(message: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        CliError::ServerError {
            message: message.into(),
        }
    }

    /// Get exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ConfigError { .. } => 1,
            CliError::InvalidArgument { .. } => 2,
            CliError::ConnectionError { .. } => 3,
            CliError::ApiError { .. } => 4,
            CliError::DecodeError { .. } => 5,
            CliError::JsonError(_) => 6,
            CliError::CatalogError(_) => 10,
            CliError::NotFound { .. } => 21,
            CliError::ServerError { .. } => 30,
        }
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound { service, path } => CliError::NotFound {
                what: format!("{}{}", service, path),
            },
            ClientError::Status {
                service,
                status,
                message,
            } => CliError::ApiError {
                status,
                message: format!("{}: {}", service, message),
            },
            ClientError::Unavailable { service, message } => CliError::ConnectionError {
                message: format!("{}: {}", service, message),
            },
            ClientError::Decode { service, message } => CliError::DecodeError {
                message: format!("{}: {}", service, message),
            },
            ClientError::Config(message) => CliError::ConfigError { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad log filter");
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("bad log filter"));
    }

    #[test]
    fn test_client_not_found_maps_to_not_found() {
        let err = CliError::from(ClientError::not_found("drivers-api", "/api/drivers/9"));
        assert_eq!(err.exit_code(), 21);
        assert!(err.to_string().contains("drivers-api/api/drivers/9"));
    }

    #[test]
    fn test_client_unavailable_maps_to_connection() {
        let err = CliError::from(ClientError::unavailable("teams-api", "connection refused"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_client_status_keeps_code() {
        let err = CliError::from(ClientError::status("events-api", 503, "down"));
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_catalog_error() {
        let err = CliError::from(CatalogError::validation("year is required"));
        assert_eq!(err.exit_code(), 10);
    }
}
