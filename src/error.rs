use crate::common::{ErrorResponse, StatusCode};
use crate::modules::product::RepositoryError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Status code this error is reported with at the HTTP boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::BadRequest(_) => StatusCode::BadRequest,
            CatalogError::NotFound(_) => StatusCode::NotFound,
            CatalogError::Conflict(_) => StatusCode::Conflict,
            CatalogError::Repository(_)
            | CatalogError::DependencyNotFound { .. }
            | CatalogError::DowncastFailed { .. }
            | CatalogError::Config(_) => StatusCode::InternalServerError,
        }
    }
}

impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        CatalogError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for CatalogError {
    fn from(rejection: PathRejection) -> Self {
        CatalogError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for CatalogError {
    fn from(rejection: QueryRejection) -> Self {
        CatalogError::BadRequest(rejection.body_text())
    }
}

impl axum::response::IntoResponse for CatalogError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status == StatusCode::InternalServerError {
            tracing::warn!(error = %self, "Request failed with an internal error");
        }
        ErrorResponse::new(status, self.to_string()).into_response()
    }
}
