use crate::common::StatusCode;
use axum::{
    Json,
    http::StatusCode as HttpStatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error payload returned for every failed request
///
/// Field names are serialized in snake_case.
///
/// # Example
/// ```
/// use product_catalog::common::{ErrorResponse, StatusCode};
///
/// let body = ErrorResponse::new(StatusCode::Conflict, "Products with names 'Pixel' already exist");
/// assert_eq!(body.status_code, 409);
/// assert_eq!(body.message, "Conflict");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    pub description: String,
}

impl ErrorResponse {
    /// Build the payload for a failure category
    ///
    /// `message` is derived from the `StatusCode` variant; `description`
    /// carries the detail of the specific failure.
    pub fn new(status: StatusCode, description: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: status.to_string(),
            description: description.into(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = HttpStatusCode::from_u16(self.status_code)
            .unwrap_or(HttpStatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
