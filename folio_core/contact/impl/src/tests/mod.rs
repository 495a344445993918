use std::sync::{Arc, LazyLock};

use folio_demo::{NOW, SUBMISSION_ID_1};
use folio_email_contracts::{Email, EmailBody, MockEmailService};
use folio_models::email_address::{EmailAddress, EmailAddressWithName};
use folio_persistence_contracts::MockSubmissionRepository;
use folio_shared_contracts::{id::MockIdService, time::MockTimeService};
use folio_templates_contracts::{ContactNotification, MockTemplateService};

use crate::{ContactFeatureConfig, ContactFeatureServiceImpl};

mod submit;

type Sut = ContactFeatureServiceImpl<
    MockIdService,
    MockTimeService,
    MockEmailService,
    MockTemplateService,
    MockSubmissionRepository,
>;

static RECIPIENT: LazyLock<EmailAddressWithName> =
    LazyLock::new(|| "Portfolio Owner <owner@example.com>".parse().unwrap());

impl Default for ContactFeatureConfig {
    fn default() -> Self {
        Self {
            recipient: Arc::new(RECIPIENT.clone()),
            site_label: "Portfolio".into(),
        }
    }
}

static NOTIFICATION_JO: LazyLock<ContactNotification> = LazyLock::new(|| ContactNotification {
    name: "Jo".into(),
    email: "a@b.co".into(),
    subject: "Hello there".into(),
    message: "This is a test message.".into(),
    submission_id: SUBMISSION_ID_1.to_string(),
    timestamp: "2024-03-01 12:30:45 UTC".into(),
});

static EMAIL_JO: LazyLock<Email> = LazyLock::new(|| Email {
    recipient: RECIPIENT.clone(),
    subject: "Portfolio Contact: Hello there".into(),
    body: EmailBody::Alternative {
        text: "rendered text".into(),
        html: "rendered html".into(),
    },
    reply_to: Some(
        "a@b.co"
            .parse::<EmailAddress>()
            .unwrap()
            .with_name("Jo".into()),
    ),
});

fn id_and_time() -> (MockIdService, MockTimeService) {
    (
        MockIdService::new().with_generate_submission_id(*NOW, SUBMISSION_ID_1.clone()),
        MockTimeService::new().with_now(*NOW),
    )
}
