use chrono::{DateTime, NaiveDate, Utc};
use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::contact::ContactMessage;

/// Correlation id of an accepted submission.
///
/// Starts with a timestamp, so ids of the same format sort chronologically.
#[nutype(derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deref,
    From,
    Display,
    Serialize,
    Deserialize,
))]
pub struct SubmissionId(String);

/// One entry of the submission log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl SubmissionRecord {
    pub fn new(id: SubmissionId, timestamp: DateTime<Utc>, message: &ContactMessage) -> Self {
        Self {
            id,
            timestamp,
            name: message.author.name.clone().into_inner(),
            email: message.author.email.clone().into_inner(),
            subject: message.subject.clone().into_inner(),
            message: message.content.clone().into_inner(),
        }
    }

    /// The calendar day (UTC) the record belongs to.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// A page of the most recent submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionList {
    pub records: Vec<SubmissionRecord>,
    /// Total number of submissions in the log, not just this page.
    pub total: usize,
}
