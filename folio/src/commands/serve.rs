use folio_config::Config;
use folio_email_contracts::EmailService;
use tracing::{info, warn};

use crate::{
    email,
    environment::{ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!(environment = %config.environment, "Starting folio");

    let email = email::connect(&config.email).await?;
    if email.is_configured() {
        info!("Checking smtp server");
        // startup continues without a reachable smtp server
        if let Err(err) = email.ping().await {
            warn!("SMTP server not available: {err}");
        }
    } else {
        warn!("SMTP credentials not configured, contact messages will only be logged");
    }

    match &config.submission_log {
        Some(submission_log) => info!(
            directory = %submission_log.directory.display(),
            "Submission log enabled"
        ),
        None => info!("Submission log disabled"),
    }

    let config_provider = ConfigProvider::new(&config)?;
    let provider = Provider::new(config_provider, email)?;
    provider.rest_server().serve().await
}
