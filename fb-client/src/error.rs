//! Remote client error types

use thiserror::Error;

/// Remote client result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Failure of a remote catalog call
#[derive(Error, Debug)]
pub enum ClientError {
    /// The remote answered 404
    #[error("{service}: {path} not found")]
    NotFound { service: String, path: String },

    /// The remote answered with another non-2xx status
    #[error("{service} request failed: {status} - {message}")]
    Status {
        service: String,
        status: u16,
        message: String,
    },

    /// The remote could not be reached or did not answer in time
    #[error("{service} unavailable: {message}")]
    Unavailable { service: String, message: String },

    /// The remote answered 2xx with a body that does not match the DTO
    #[error("{service} sent an invalid response: {message}")]
    Decode { service: String, message: String },

    /// Client could not be constructed
    #[error("Client configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub fn not_found(service: impl Into<String>, path: impl Into<String>) -> Self {
        ClientError::NotFound {
            service: service.into(),
            path: path.into(),
        }
    }

    pub fn status(service: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        ClientError::Status {
            service: service.into(),
            status,
            message: message.into(),
        }
    }

    pub fn unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        ClientError::Unavailable {
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn decode(service: impl Into<String>, message: impl Into<String>) -> Self {
        ClientError::Decode {
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, ClientError::Unavailable { .. })
    }

    /// Logical name of the service that failed, if any
    pub fn service(&self) -> Option<&str> {
        match self {
            ClientError::NotFound { service, .. }
            | ClientError::Status { service, .. }
            | ClientError::Unavailable { service, .. }
            | ClientError::Decode { service, .. } => Some(service),
            ClientError::Config(_) => None,
        }
    }
}
