use crate::common::{ErrorResponse, StatusCode};
use crate::error::CatalogError;
use crate::exception::ExceptionFilter;
use axum::response::{IntoResponse, Response};
use std::error::Error;

/// Default exception filter for the catalog API
///
/// Typed `CatalogError`s keep their own status mapping; anything else becomes
/// the generic internal error carrying the underlying message.
#[derive(Default)]
pub struct HttpExceptionFilter;

impl ExceptionFilter for HttpExceptionFilter {
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response {
        match error.downcast::<CatalogError>() {
            Ok(catalog_error) => (*catalog_error).into_response(),
            Err(other) => {
                tracing::error!(error = %other, "Unhandled error intercepted");
                ErrorResponse::new(StatusCode::InternalServerError, other.to_string())
                    .into_response()
            }
        }
    }
}
