use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_models::Environment;
use serde::Serialize;

use crate::error_code;

pub trait ApiErrorCode: Sized {
    const CODE: &'static str;
    const STATUS_CODE: StatusCode;

    fn with_details(self, details: impl Into<String>) -> Response {
        (
            Self::STATUS_CODE,
            Json(ApiError {
                error: Self::CODE,
                details: details.into(),
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: &'static str,
    pub details: String,
}

/// Log the error and hide its details outside of development.
pub fn internal_server_error(err: impl Into<anyhow::Error>, environment: Environment) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");

    let details = if environment.is_development() {
        format!("{err:#}")
    } else {
        "Please try again later.".into()
    };

    InternalError.with_details(details)
}

error_code! {
    pub InternalError(INTERNAL_SERVER_ERROR, "INTERNAL");
    pub NotFoundError(NOT_FOUND, "NOT_FOUND");
    /// Listing submissions is only possible in development.
    pub AccessDeniedError(FORBIDDEN, "ACCESS_DENIED");
    pub TooManyRequestsError(TOO_MANY_REQUESTS, "RATE_LIMITED");

    // Contact
    pub MissingFieldsError(BAD_REQUEST, "MISSING_FIELDS");
    pub InvalidEmailError(BAD_REQUEST, "INVALID_EMAIL");
    pub InvalidNameLengthError(BAD_REQUEST, "INVALID_NAME_LENGTH");
    pub InvalidSubjectLengthError(BAD_REQUEST, "INVALID_SUBJECT_LENGTH");
    pub InvalidMessageLengthError(BAD_REQUEST, "INVALID_MESSAGE_LENGTH");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::routes::tests::json_body;

    #[tokio::test]
    async fn internal_server_error_development() {
        let err = anyhow::anyhow!("connection reset").context("Failed to read submissions");

        let response = internal_server_error(err, Environment::Development);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({
                "error": "INTERNAL",
                "details": "Failed to read submissions: connection reset",
            })
        );
    }

    #[tokio::test]
    async fn internal_server_error_production() {
        let err = anyhow::anyhow!("connection reset");

        let response = internal_server_error(err, Environment::Production);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"error": "INTERNAL", "details": "Please try again later."})
        );
    }
}
