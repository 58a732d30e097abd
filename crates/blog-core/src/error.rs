//! Domain-level error types.

use thiserror::Error;

use crate::domain::DocumentId;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: DocumentId,
    },

    #[error("Unknown author: {0}")]
    UnknownAuthor(DocumentId),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Malformed document: {0}")]
    Decode(String),
}
