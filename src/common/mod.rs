pub mod response;
pub mod status_code;

pub use response::ErrorResponse;
pub use status_code::StatusCode;
