use chrono::{DateTime, Utc};
use folio_models::submission::SubmissionId;
use folio_shared_contracts::id::IdService;
use rand::{distributions::Uniform, prelude::Distribution, thread_rng, Rng};
use tracing::instrument;

/// Length of the random part of a submission id.
pub const SUFFIX_LEN: usize = 9;

#[derive(Debug, Clone, Copy, Default)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    #[instrument(level = "trace", skip(self))]
    fn generate_submission_id(&self, timestamp: DateTime<Utc>) -> SubmissionId {
        format_submission_id(timestamp, thread_rng()).into()
    }
}

fn format_submission_id(timestamp: DateTime<Utc>, rng: impl Rng) -> String {
    // `:` and `.` are replaced so the id is safe in file names and urls
    let mut out = timestamp.format("%Y-%m-%dT%H-%M-%S-%3fZ-").to_string();
    out.extend(lowercase_base36().sample_iter(rng).take(SUFFIX_LEN));
    out
}

fn lowercase_base36() -> impl Distribution<char> {
    Uniform::new(0u8, 10 + 26).map(|x| (x + b'0' + (x >= 10) as u8 * 39) as char)
}
