use chrono::{DateTime, Utc};
use folio_models::submission::SubmissionId;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait IdService: Send + Sync + 'static {
    /// Generates a new submission id for a submission received at `timestamp`.
    ///
    /// Ids generated in quick succession differ with overwhelming
    /// probability, but are not guaranteed to be unique.
    fn generate_submission_id(&self, timestamp: DateTime<Utc>) -> SubmissionId;
}

#[cfg(feature = "mock")]
impl MockIdService {
    pub fn with_generate_submission_id(
        mut self,
        timestamp: DateTime<Utc>,
        id: SubmissionId,
    ) -> Self {
        self.expect_generate_submission_id()
            .once()
            .with(mockall::predicate::eq(timestamp))
            .return_once(|_| id);
        self
    }
}
