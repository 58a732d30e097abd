//! Error handling middleware - renders faults as HTML error pages.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use askama::Template;
use thiserror::Error;

use blog_core::error::DomainError;
use blog_shared::ErrorPage;

use crate::views::{ErrorTemplate, NotFoundTemplate};

/// Application-level error type that converts to rendered error pages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A path or form carried something that is not a document ID.
    /// Surfaces as the generic fault page.
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Template rendering failed: {0}")]
    Template(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidIdentifier(_) | AppError::Template(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let rendered = match self {
            AppError::NotFound => NotFoundTemplate.render(),
            AppError::BadRequest(detail) => ErrorTemplate {
                error: ErrorPage::bad_request(detail),
            }
            .render(),
            AppError::InvalidIdentifier(raw) => {
                tracing::warn!(id = %raw, "Malformed identifier");
                ErrorTemplate {
                    error: ErrorPage::internal_error(),
                }
                .render()
            }
            AppError::Template(detail) | AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorTemplate {
                    error: ErrorPage::internal_error(),
                }
                .render()
            }
        };

        match rendered {
            Ok(body) => HttpResponse::build(status)
                .content_type(ContentType::html())
                .body(body),
            Err(e) => {
                tracing::error!("Error page rendering failed: {}", e);
                HttpResponse::build(status)
                    .content_type(ContentType::plaintext())
                    .body(status.canonical_reason().unwrap_or("Error"))
            }
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidIdentifier(raw) => AppError::InvalidIdentifier(raw),
            DomainError::NotFound { .. } => AppError::NotFound,
            DomainError::UnknownAuthor(id) => {
                AppError::BadRequest(format!("No author with id {}", id))
            }
            DomainError::Repository(e) => {
                tracing::error!("Database error: {}", e);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
