use chrono::{DateTime, Utc};
use folio_core_contact_contracts::{ContactSubmissionOutcome, DeliveryErrorKind};
use folio_models::{
    contact::ContactSubmissionForm,
    submission::{SubmissionList, SubmissionRecord},
};
use serde::{Deserialize, Serialize};

/// Missing keys and `null` are both treated as absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl From<ApiContactSubmission> for ContactSubmissionForm {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ApiContactSubmitQuery {
    /// Include a machine readable code of the delivery failure.
    #[serde(default)]
    pub delivery_details: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmissionResponse {
    pub success: bool,
    pub submission_id: String,
    pub delivered: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_error_code: Option<&'static str>,
}

impl ApiContactSubmissionResponse {
    pub fn new(outcome: ContactSubmissionOutcome, delivery_details: bool) -> Self {
        let delivered = outcome.delivered();
        let message = if delivered {
            "Email sent successfully!"
        } else {
            "Form submitted successfully! Your message has been accepted and will be processed."
        };

        let (delivery_error, delivery_error_code) = match outcome.delivery_error {
            Some(err) => (
                Some(err.message),
                delivery_details.then_some(delivery_error_code(err.kind)),
            ),
            None => (None, None),
        };

        Self {
            success: true,
            submission_id: outcome.submission_id.into_inner(),
            delivered,
            message,
            delivery_error,
            delivery_error_code,
        }
    }
}

fn delivery_error_code(kind: DeliveryErrorKind) -> &'static str {
    match kind {
        DeliveryErrorKind::Authentication => "EMAIL_AUTH_FAILED",
        DeliveryErrorKind::Connection => "EMAIL_CONNECTION_FAILED",
        DeliveryErrorKind::Unknown => "EMAIL_DELIVERY_FAILED",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiSubmissionRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<SubmissionRecord> for ApiSubmissionRecord {
    fn from(value: SubmissionRecord) -> Self {
        Self {
            id: value.id.into_inner(),
            timestamp: value.timestamp,
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiSubmissionList {
    pub emails: Vec<ApiSubmissionRecord>,
    pub total: usize,
}

impl From<SubmissionList> for ApiSubmissionList {
    fn from(value: SubmissionList) -> Self {
        Self {
            emails: value.records.into_iter().map(Into::into).collect(),
            total: value.total,
        }
    }
}
