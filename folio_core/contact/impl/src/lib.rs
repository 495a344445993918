use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use folio_core_contact_contracts::{
    ContactFeatureService, ContactSubmissionOutcome, ContactSubmitError, SUBMISSION_PAGE_SIZE,
};
use folio_email_contracts::{Email, EmailBody, EmailError, EmailService};
use folio_models::{
    contact::{ContactMessage, ContactSubmissionForm},
    email_address::EmailAddressWithName,
    submission::{SubmissionId, SubmissionList, SubmissionRecord},
};
use folio_persistence_contracts::SubmissionRepository;
use folio_shared_contracts::{id::IdService, time::TimeService};
use folio_templates_contracts::{
    ContactNotification, ContactNotificationHtmlTemplate, ContactNotificationTextTemplate,
    TemplateService,
};
use tracing::{info, instrument, warn};

mod validate;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Default))]
pub struct ContactFeatureServiceImpl<Id, Time, Email, Template, SubmissionRepo> {
    id: Id,
    time: Time,
    email: Email,
    template: Template,
    submission_repo: SubmissionRepo,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Mailbox every contact notification is delivered to.
    pub recipient: Arc<EmailAddressWithName>,
    /// Prefix of the notification subject.
    pub site_label: Arc<str>,
}

impl<Id, Time, Email, Template, SubmissionRepo>
    ContactFeatureServiceImpl<Id, Time, Email, Template, SubmissionRepo>
{
    pub fn new(
        id: Id,
        time: Time,
        email: Email,
        template: Template,
        submission_repo: SubmissionRepo,
        config: ContactFeatureConfig,
    ) -> Self {
        Self {
            id,
            time,
            email,
            template,
            submission_repo,
            config,
        }
    }
}

impl<Id, Time, EmailS, Template, SubmissionRepo> ContactFeatureService
    for ContactFeatureServiceImpl<Id, Time, EmailS, Template, SubmissionRepo>
where
    Id: IdService,
    Time: TimeService,
    EmailS: EmailService,
    Template: TemplateService,
    SubmissionRepo: SubmissionRepository,
{
    #[instrument(skip_all)]
    async fn submit(
        &self,
        form: ContactSubmissionForm,
    ) -> Result<ContactSubmissionOutcome, ContactSubmitError> {
        let message = validate::validate(form)?;

        let now = self.time.now();
        let submission_id = self.id.generate_submission_id(now);

        let record = SubmissionRecord::new(submission_id.clone(), now, &message);
        if let Err(err) = self.submission_repo.append(&record).await {
            warn!(%submission_id, "Failed to log contact submission: {err:#}");
        }

        let delivery_error = match self.deliver(message, &submission_id, now).await {
            Ok(()) => {
                info!(%submission_id, "Contact message delivered");
                None
            }
            Err(err) => {
                warn!(%submission_id, "Failed to deliver contact message: {err:#}");
                Some(err.into())
            }
        };

        Ok(ContactSubmissionOutcome {
            submission_id,
            delivery_error,
        })
    }

    #[instrument(skip_all)]
    async fn list_submissions(&self) -> anyhow::Result<SubmissionList> {
        self.submission_repo
            .list_recent(SUBMISSION_PAGE_SIZE)
            .await
            .context("Failed to list contact submissions")
    }
}

impl<Id, Time, EmailS, Template, SubmissionRepo>
    ContactFeatureServiceImpl<Id, Time, EmailS, Template, SubmissionRepo>
where
    EmailS: EmailService,
    Template: TemplateService,
{
    async fn deliver(
        &self,
        message: ContactMessage,
        submission_id: &SubmissionId,
        now: DateTime<Utc>,
    ) -> Result<(), EmailError> {
        let notification = ContactNotification {
            name: message.author.name.to_string(),
            email: message.author.email.to_string(),
            subject: message.subject.to_string(),
            message: message.content.into_inner(),
            submission_id: submission_id.to_string(),
            timestamp: now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        };

        let text = self
            .template
            .render(&ContactNotificationTextTemplate(notification.clone()))
            .context("Failed to render text notification")?;
        let html = self
            .template
            .render(&ContactNotificationHtmlTemplate(notification))
            .context("Failed to render html notification")?;

        let email = Email {
            recipient: (*self.config.recipient).clone(),
            subject: format!("{} Contact: {}", self.config.site_label, *message.subject),
            body: EmailBody::Alternative { text, html },
            reply_to: message
                .author
                .email
                .to_email_address()
                .map(|address| address.with_name(message.author.name.into_inner())),
        };

        self.email.ping().await?;
        self.email.send(email).await
    }
}
