//! Domain errors

use thiserror::Error;

use super::billing::ReadingError;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Validation(#[from] ReadingError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn reading_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Reading",
            field: "id",
            value: id.to_string(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
