use std::future::Future;

use folio_email_contracts::EmailError;
use folio_models::{
    contact::ContactSubmissionForm,
    submission::{SubmissionId, SubmissionList},
};
use thiserror::Error;

/// Maximum number of submissions returned by
/// [`ContactFeatureService::list_submissions`].
pub const SUBMISSION_PAGE_SIZE: usize = 50;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a contact form submission and try to deliver it to the site
    /// owner.
    ///
    /// Delivery problems never fail the submission; they are reported in the
    /// returned outcome instead.
    fn submit(
        &self,
        form: ContactSubmissionForm,
    ) -> impl Future<Output = Result<ContactSubmissionOutcome, ContactSubmitError>> + Send;

    /// Return the most recent logged submissions, newest first.
    fn list_submissions(&self) -> impl Future<Output = anyhow::Result<SubmissionList>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error(transparent)]
    Validation(#[from] ContactValidationError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Please fill in all required fields: name, email, subject, and message.")]
    MissingFields,
    #[error("Please provide a valid email address.")]
    InvalidEmail,
    #[error("Name must be between 2 and 100 characters.")]
    InvalidNameLength,
    #[error("Subject must be between 5 and 200 characters.")]
    InvalidSubjectLength,
    #[error("Message must be between 10 and 2000 characters.")]
    InvalidMessageLength,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmissionOutcome {
    pub submission_id: SubmissionId,
    /// `None` if the message has been delivered.
    pub delivery_error: Option<DeliveryError>,
}

impl ContactSubmissionOutcome {
    pub fn delivered(&self) -> bool {
        self.delivery_error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryError {
    pub kind: DeliveryErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryErrorKind {
    Authentication,
    Connection,
    Unknown,
}

impl From<EmailError> for DeliveryError {
    fn from(value: EmailError) -> Self {
        match value {
            EmailError::Authentication(message) => Self {
                kind: DeliveryErrorKind::Authentication,
                message,
            },
            EmailError::Connection(message) => Self {
                kind: DeliveryErrorKind::Connection,
                message,
            },
            EmailError::Other(err) => Self {
                kind: DeliveryErrorKind::Unknown,
                message: format!("{err:#}"),
            },
        }
    }
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        form: ContactSubmissionForm,
        result: Result<ContactSubmissionOutcome, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_submissions(mut self, result: anyhow::Result<SubmissionList>) -> Self {
        self.expect_list_submissions()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }
}
