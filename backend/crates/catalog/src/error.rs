//! Catalog Error Types

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::BookId;
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No book with this id
    #[error("Book not found")]
    BookNotFound(BookId),

    /// ISBN held by another book
    #[error("A book with this ISBN already exists")]
    IsbnTaken,

    /// Request input failed validation
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::BookNotFound(_) => ErrorKind::NotFound,
            CatalogError::IsbnTaken => ErrorKind::Conflict,
            CatalogError::Validation(_) => ErrorKind::BadRequest,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError, keeping the underlying error as its source
    pub fn into_app_error(self) -> AppError {
        match self {
            CatalogError::BookNotFound(id) => AppError::not_found("Book not found")
                .with_detail(format!("Book with ID {id} does not exist")),
            CatalogError::IsbnTaken => {
                AppError::conflict("A book with this ISBN already exists")
                    .with_detail("ISBN must be unique")
            }
            CatalogError::Validation(detail) => {
                AppError::bad_request("Validation failed").with_detail(detail)
            }
            CatalogError::Database(e) => AppError::from(e),
            CatalogError::Internal(msg) => {
                AppError::internal("Catalog internal error").with_source(InternalFault(msg))
            }
        }
    }
}

/// Message-only source for [`CatalogError::Internal`]
#[derive(Debug, Error)]
#[error("{0}")]
struct InternalFault(String);

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.into_app_error().into_response()
    }
}

impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        CatalogError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for CatalogError {
    fn from(rejection: QueryRejection) -> Self {
        CatalogError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for CatalogError {
    fn from(rejection: PathRejection) -> Self {
        CatalogError::Validation(rejection.body_text())
    }
}
