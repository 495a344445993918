//! Fixed demo data shared by tests across the workspace.

use std::sync::LazyLock;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use folio_models::{
    contact::{ContactMessage, ContactMessageAuthor, ContactSubmissionForm},
    submission::{SubmissionId, SubmissionRecord},
};

pub static NOW: LazyLock<DateTime<Utc>> = LazyLock::new(|| {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap() + TimeDelta::milliseconds(123)
});

pub static SUBMISSION_ID_1: LazyLock<SubmissionId> =
    LazyLock::new(|| "2024-03-01T12-30-45-123Z-k3j9x0a2b".to_owned().into());

/// The smallest submission that passes validation.
pub static FORM_JO: LazyLock<ContactSubmissionForm> = LazyLock::new(|| ContactSubmissionForm {
    name: Some("Jo".into()),
    email: Some("a@b.co".into()),
    subject: Some("Hello there".into()),
    message: Some("This is a test message.".into()),
});

pub static MESSAGE_JO: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    author: ContactMessageAuthor {
        name: "Jo".try_into().unwrap(),
        email: "a@b.co".try_into().unwrap(),
    },
    subject: "Hello there".try_into().unwrap(),
    content: "This is a test message.".try_into().unwrap(),
});

pub static FORM_MAX: LazyLock<ContactSubmissionForm> = LazyLock::new(|| ContactSubmissionForm {
    name: Some("Max Mustermann".into()),
    email: Some("max.mustermann@example.de".into()),
    subject: Some("Project inquiry".into()),
    message: Some("Hi!\nI would like to talk about a project.".into()),
});

pub static RECORD_JO: LazyLock<SubmissionRecord> =
    LazyLock::new(|| SubmissionRecord::new(SUBMISSION_ID_1.clone(), *NOW, &MESSAGE_JO));

/// Builds a record of `MESSAGE_JO` received at `timestamp`.
pub fn record_at(timestamp: DateTime<Utc>, suffix: &str) -> SubmissionRecord {
    let id = format!("{}-{suffix}", timestamp.format("%Y-%m-%dT%H-%M-%S-%3fZ"));
    SubmissionRecord::new(id.into(), timestamp, &MESSAGE_JO)
}
