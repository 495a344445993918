use axum::response::Response;

use crate::errors::{ApiErrorCode, NotFoundError};

pub mod contact;
pub mod health;

pub async fn not_found() -> Response {
    NotFoundError.with_details("The requested endpoint does not exist.")
}
