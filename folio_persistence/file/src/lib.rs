use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use chrono::NaiveDate;
use folio_models::submission::{SubmissionList, SubmissionRecord};
use folio_persistence_contracts::SubmissionRepository;
use tokio::{fs::OpenOptions, io::AsyncWriteExt, sync::Mutex};
use tracing::{instrument, trace, warn};

const FILE_PREFIX: &str = "contact-";
const FILE_EXTENSION: &str = ".jsonl";

/// Stores submissions as JSON Lines, one file per calendar day
/// (`contact-YYYY-MM-DD.jsonl`).
#[derive(Debug, Clone)]
pub struct FileSubmissionRepository {
    state: Option<Arc<State>>,
}

#[derive(Debug)]
struct State {
    directory: PathBuf,
    /// Serializes appends so records from concurrent requests never
    /// interleave within a file.
    write_lock: Mutex<()>,
}

impl FileSubmissionRepository {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            state: Some(Arc::new(State {
                directory: directory.into(),
                write_lock: Mutex::new(()),
            })),
        }
    }

    /// A repository that discards every record and never lists anything.
    pub fn disabled() -> Self {
        Self { state: None }
    }

    pub fn directory(&self) -> Option<&Path> {
        self.state.as_ref().map(|state| state.directory.as_path())
    }
}

impl SubmissionRepository for FileSubmissionRepository {
    #[instrument(skip_all, fields(id = %record.id))]
    async fn append(&self, record: &SubmissionRecord) -> anyhow::Result<()> {
        let Some(state) = &self.state else {
            trace!("submission log disabled");
            return Ok(());
        };

        let mut line = serde_json::to_vec(record).context("Failed to serialize submission")?;
        line.push(b'\n');

        let path = state.directory.join(bucket_file_name(record.day()));

        let _guard = state.write_lock.lock().await;

        tokio::fs::create_dir_all(&state.directory)
            .await
            .with_context(|| {
                format!(
                    "Failed to create submission log directory {}",
                    state.directory.display()
                )
            })?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .with_context(|| format!("Failed to open {}", path.display()))?;
        file.write_all(&line)
            .await
            .with_context(|| format!("Failed to write to {}", path.display()))?;
        file.flush().await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: usize) -> anyhow::Result<SubmissionList> {
        let Some(state) = &self.state else {
            return Ok(SubmissionList::default());
        };

        let mut dir = match tokio::fs::read_dir(&state.directory).await {
            Ok(dir) => dir,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(SubmissionList::default()),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read directory {}", state.directory.display())
                })
            }
        };

        let mut records = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let name = entry.file_name();
            let is_bucket = name
                .to_str()
                .is_some_and(|name| name.starts_with(FILE_PREFIX) && name.ends_with(FILE_EXTENSION));
            if !is_bucket {
                continue;
            }

            let path = entry.path();
            let content = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            records.extend(parse_bucket(&path, &content));
        }

        records.sort_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total = records.len();
        records.truncate(limit);

        Ok(SubmissionList { records, total })
    }
}

fn bucket_file_name(day: NaiveDate) -> String {
    format!("{FILE_PREFIX}{}{FILE_EXTENSION}", day.format("%Y-%m-%d"))
}

/// Lines are parsed independently, so a torn or non UTF-8 line only loses
/// itself.
fn parse_bucket<'a>(
    path: &'a Path,
    content: &'a [u8],
) -> impl Iterator<Item = SubmissionRecord> + 'a {
    content
        .split(|&b| b == b'\n')
        .enumerate()
        .filter(|(_, line)| !line.iter().all(u8::is_ascii_whitespace))
        .filter_map(move |(n, line)| {
            serde_json::from_slice(line)
                .inspect_err(|err| {
                    warn!(
                        file = %path.display(),
                        line = n + 1,
                        "skipping unparseable submission record: {err}"
                    )
                })
                .ok()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_file_name() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(super::bucket_file_name(day), "contact-2024-03-01.jsonl");
    }

    #[test]
    fn parse_bucket_skips_invalid_utf8() {
        let record = folio_demo::RECORD_JO.clone();
        let mut content = serde_json::to_vec(&record).unwrap();
        content.extend_from_slice(b"\r\n{\"name\": \"\xff\xfe\"}\n\n");
        content.extend_from_slice(&serde_json::to_vec(&record).unwrap());

        let records = parse_bucket(Path::new("contact-2024-03-01.jsonl"), &content)
            .collect::<Vec<_>>();

        assert_eq!(records, [record.clone(), record]);
    }
}
