use axum::http::StatusCode as HttpStatusCode;
use strum_macros::Display;

/// Failure categories reported by the catalog API.
///
/// The `Display` output is the short `message` placed in the error payload.
///
/// # Example
/// ```
/// use product_catalog::common::StatusCode;
///
/// assert_eq!(StatusCode::NotFound.to_string(), "Not found");
/// assert_eq!(StatusCode::NotFound.as_u16(), 404);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StatusCode {
    #[strum(serialize = "Bad Request")]
    BadRequest,
    #[strum(serialize = "Not found")]
    NotFound,
    #[strum(serialize = "Conflict")]
    Conflict,
    #[strum(serialize = "An error occurred while processing your request")]
    InternalServerError,
}

impl StatusCode {
    pub fn as_u16(self) -> u16 {
        HttpStatusCode::from(self).as_u16()
    }
}

impl From<StatusCode> for HttpStatusCode {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::BadRequest => HttpStatusCode::BAD_REQUEST,
            StatusCode::NotFound => HttpStatusCode::NOT_FOUND,
            StatusCode::Conflict => HttpStatusCode::CONFLICT,
            StatusCode::InternalServerError => HttpStatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
