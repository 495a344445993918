use std::future::Future;

use folio_models::email_address::EmailAddressWithName;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Sends the given email. Any non-positive response of the smtp server is
    /// reported as an error.
    fn send(&self, email: Email) -> impl Future<Output = Result<(), EmailError>> + Send;

    /// Verify the connection and credentials of the smtp server without
    /// sending anything.
    fn ping(&self) -> impl Future<Output = Result<(), EmailError>> + Send;

    /// Whether credentials for the smtp server have been configured.
    fn is_configured(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddressWithName,
    pub subject: String,
    pub body: EmailBody,
    pub reply_to: Option<EmailAddressWithName>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBody {
    Text(String),
    Html(String),
    /// `multipart/alternative` with a plain text and an html part.
    Alternative { text: String, html: String },
}

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Email authentication failed: {0}")]
    Authentication(String),
    #[error("Email server connection failed: {0}")]
    Connection(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: Result<(), EmailError>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_ping(mut self, result: Result<(), EmailError>) -> Self {
        self.expect_ping()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_is_configured(mut self, configured: bool) -> Self {
        self.expect_is_configured()
            .once()
            .return_const(configured);
        self
    }
}
