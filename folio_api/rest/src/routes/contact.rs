use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    routing, Extension, Json, Router,
};
use folio_core_contact_contracts::{
    ContactFeatureService, ContactSubmitError, ContactValidationError,
};
use folio_models::Environment;

use crate::{
    errors::{
        internal_server_error, AccessDeniedError, ApiErrorCode, InvalidEmailError,
        InvalidMessageLengthError, InvalidNameLengthError, InvalidSubjectLengthError,
        MissingFieldsError,
    },
    extractors::{BodyRejection, JsonOrForm},
    models::contact::{
        ApiContactSubmission, ApiContactSubmissionResponse, ApiContactSubmitQuery,
        ApiSubmissionList,
    },
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .route("/contact/submissions", routing::get(list_submissions))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    Extension(environment): Extension<Environment>,
    query: Result<Query<ApiContactSubmitQuery>, QueryRejection>,
    submission: Result<JsonOrForm<ApiContactSubmission>, BodyRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(err) => return internal_server_error(err, environment),
    };
    let JsonOrForm(submission) = match submission {
        Ok(submission) => submission,
        Err(BodyRejection(err)) => return internal_server_error(err, environment),
    };

    match service.submit(submission.into()).await {
        Ok(outcome) => {
            Json(ApiContactSubmissionResponse::new(outcome, query.delivery_details)).into_response()
        }
        Err(ContactSubmitError::Validation(err)) => validation_error(err),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err, environment),
    }
}

fn validation_error(err: ContactValidationError) -> Response {
    let details = err.to_string();
    match err {
        ContactValidationError::MissingFields => MissingFieldsError.with_details(details),
        ContactValidationError::InvalidEmail => InvalidEmailError.with_details(details),
        ContactValidationError::InvalidNameLength => InvalidNameLengthError.with_details(details),
        ContactValidationError::InvalidSubjectLength => {
            InvalidSubjectLengthError.with_details(details)
        }
        ContactValidationError::InvalidMessageLength => {
            InvalidMessageLengthError.with_details(details)
        }
    }
}

async fn list_submissions(
    service: State<Arc<impl ContactFeatureService>>,
    Extension(environment): Extension<Environment>,
) -> Response {
    if !environment.is_development() {
        return AccessDeniedError.with_details("Access denied");
    }

    match service.list_submissions().await {
        Ok(list) => Json(ApiSubmissionList::from(list)).into_response(),
        Err(err) => internal_server_error(err, environment),
    }
}
