use std::future::Future;

use folio_models::submission::{SubmissionList, SubmissionRecord};

/// Append-only log of accepted contact form submissions, grouped by day.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SubmissionRepository: Send + Sync + 'static {
    /// Appends a record to the bucket of the day the record was received.
    ///
    /// Safe to call concurrently.
    fn append(&self, record: &SubmissionRecord) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Returns up to `limit` records, newest first, together with the total
    /// number of records in the log.
    fn list_recent(
        &self,
        limit: usize,
    ) -> impl Future<Output = anyhow::Result<SubmissionList>> + Send;
}

#[cfg(feature = "mock")]
impl MockSubmissionRepository {
    pub fn with_append(mut self, record: SubmissionRecord, result: anyhow::Result<()>) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_recent(mut self, limit: usize, result: SubmissionList) -> Self {
        self.expect_list_recent()
            .once()
            .with(mockall::predicate::eq(limit))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
