use anyhow::{bail, Context};
use clap::Subcommand;
use folio_config::Config;
use folio_core_contact_contracts::SUBMISSION_PAGE_SIZE;
use folio_persistence_contracts::SubmissionRepository;
use folio_persistence_file::FileSubmissionRepository;

#[derive(Debug, Subcommand)]
pub enum SubmissionsCommand {
    /// Print the most recent submissions as JSON, newest first
    #[command(aliases(["ls"]))]
    List {
        /// Maximum number of submissions to print
        #[arg(short, long, default_value_t = SUBMISSION_PAGE_SIZE)]
        limit: usize,
    },
}

impl SubmissionsCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            SubmissionsCommand::List { limit } => list(config, limit).await,
        }
    }
}

async fn list(config: Config, limit: usize) -> anyhow::Result<()> {
    let Some(submission_log) = &config.submission_log else {
        bail!("The submission log is disabled");
    };

    let repo = FileSubmissionRepository::new(&submission_log.directory);
    let list = repo.list_recent(limit).await?;

    let output = serde_json::to_string_pretty(&list.records)
        .context("Failed to serialize submissions")?;
    println!("{output}");
    eprintln!("Showing {} of {} submissions", list.records.len(), list.total);

    Ok(())
}
