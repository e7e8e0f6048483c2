//! Catalog store error types

use thiserror::Error;

/// Catalog result type
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog store and service errors
///
/// Absence of a record is not an error at this layer: lookups return
/// `Option` and the caller decides what a missing id means.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Duplicate entity
    #[error("Duplicate entity: {entity_type} with key {key}")]
    Duplicate { entity_type: String, key: String },

    /// Required attribute missing or blank
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CatalogError {
    /// Create a duplicate error
    pub fn duplicate(entity_type: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: entity_type.into(),
            key: key.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Duplicate { .. } => "DUPLICATE_ENTITY",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message() {
        let err = CatalogError::duplicate("Race", "2024/1");
        assert_eq!(err.code(), "DUPLICATE_ENTITY");
        assert!(err.to_string().contains("2024/1"));
    }

    #[test]
    fn test_validation_message() {
        let err = CatalogError::validation("Race year is required");
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "Validation error: Race year is required");
    }
}
