use anyhow::anyhow;
use folio_core_contact_contracts::{
    ContactFeatureService, ContactSubmissionOutcome, ContactSubmitError, ContactValidationError,
    DeliveryError, DeliveryErrorKind,
};
use folio_demo::{FORM_JO, FORM_MAX, NOW, RECORD_JO, SUBMISSION_ID_1};
use folio_email_contracts::{Email, EmailBody, EmailError, MockEmailService};
use folio_models::{
    contact::ContactSubmissionForm, email_address::EmailAddress, submission::SubmissionRecord,
};
use folio_persistence_contracts::MockSubmissionRepository;
use folio_templates_contracts::{
    ContactNotification, ContactNotificationHtmlTemplate, ContactNotificationTextTemplate,
    MockTemplateService,
};
use folio_utils::assert_matches;
use pretty_assertions::assert_eq;

use super::{id_and_time, Sut, EMAIL_JO, NOTIFICATION_JO, RECIPIENT};

fn template_jo() -> MockTemplateService {
    MockTemplateService::new()
        .with_render(
            ContactNotificationTextTemplate(NOTIFICATION_JO.clone()),
            "rendered text".into(),
        )
        .with_render(
            ContactNotificationHtmlTemplate(NOTIFICATION_JO.clone()),
            "rendered html".into(),
        )
}

#[tokio::test]
async fn ok() {
    // Arrange
    let (id, time) = id_and_time();
    let template = template_jo();
    let submission_repo = MockSubmissionRepository::new().with_append(RECORD_JO.clone(), Ok(()));
    let email = MockEmailService::new()
        .with_ping(Ok(()))
        .with_send(EMAIL_JO.clone(), Ok(()));

    let sut = Sut {
        id,
        time,
        email,
        template,
        submission_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(FORM_JO.clone()).await;

    // Assert
    let outcome = result.unwrap();
    assert!(outcome.delivered());
    assert_eq!(
        outcome,
        ContactSubmissionOutcome {
            submission_id: SUBMISSION_ID_1.clone(),
            delivery_error: None,
        }
    );
}

#[tokio::test]
async fn ok_multiline_message() {
    // Arrange
    let (id, time) = id_and_time();

    let notification = ContactNotification {
        name: "Max Mustermann".into(),
        email: "max.mustermann@example.de".into(),
        subject: "Project inquiry".into(),
        message: "Hi!\nI would like to talk about a project.".into(),
        ..NOTIFICATION_JO.clone()
    };
    let template = MockTemplateService::new()
        .with_render(
            ContactNotificationTextTemplate(notification.clone()),
            "text".into(),
        )
        .with_render(ContactNotificationHtmlTemplate(notification), "html".into());

    let submission_repo = MockSubmissionRepository::new().with_append(
        SubmissionRecord {
            id: SUBMISSION_ID_1.clone(),
            timestamp: *NOW,
            name: "Max Mustermann".into(),
            email: "max.mustermann@example.de".into(),
            subject: "Project inquiry".into(),
            message: "Hi!\nI would like to talk about a project.".into(),
        },
        Ok(()),
    );

    let email = MockEmailService::new().with_ping(Ok(())).with_send(
        Email {
            recipient: RECIPIENT.clone(),
            subject: "Portfolio Contact: Project inquiry".into(),
            body: EmailBody::Alternative {
                text: "text".into(),
                html: "html".into(),
            },
            reply_to: Some(
                "max.mustermann@example.de"
                    .parse::<EmailAddress>()
                    .unwrap()
                    .with_name("Max Mustermann".into()),
            ),
        },
        Ok(()),
    );

    let sut = Sut {
        id,
        time,
        email,
        template,
        submission_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(FORM_MAX.clone()).await;

    // Assert
    assert!(result.unwrap().delivered());
}

#[tokio::test]
async fn send_failed() {
    // Arrange
    let (id, time) = id_and_time();
    let template = template_jo();
    let submission_repo = MockSubmissionRepository::new().with_append(RECORD_JO.clone(), Ok(()));
    let email = MockEmailService::new().with_ping(Ok(())).with_send(
        EMAIL_JO.clone(),
        Err(EmailError::Other(anyhow!("stub transport failure"))),
    );

    let sut = Sut {
        id,
        time,
        email,
        template,
        submission_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(FORM_JO.clone()).await;

    // Assert
    let outcome = result.unwrap();
    assert!(!outcome.delivered());
    assert!(!outcome.submission_id.is_empty());
    assert_eq!(
        outcome.delivery_error,
        Some(DeliveryError {
            kind: DeliveryErrorKind::Unknown,
            message: "stub transport failure".into(),
        })
    );
}

#[tokio::test]
async fn authentication_failed() {
    // Arrange
    let (id, time) = id_and_time();
    let template = template_jo();
    let submission_repo = MockSubmissionRepository::new().with_append(RECORD_JO.clone(), Ok(()));
    let email = MockEmailService::new().with_ping(Err(EmailError::Authentication(
        "535 5.7.8 bad credentials".into(),
    )));

    let sut = Sut {
        id,
        time,
        email,
        template,
        submission_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(FORM_JO.clone()).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactSubmissionOutcome {
            submission_id: SUBMISSION_ID_1.clone(),
            delivery_error: Some(DeliveryError {
                kind: DeliveryErrorKind::Authentication,
                message: "535 5.7.8 bad credentials".into(),
            }),
        }
    );
}

#[tokio::test]
async fn connection_failed() {
    // Arrange
    let (id, time) = id_and_time();
    let template = template_jo();
    let submission_repo = MockSubmissionRepository::new().with_append(RECORD_JO.clone(), Ok(()));
    let email = MockEmailService::new()
        .with_ping(Err(EmailError::Connection("connection refused".into())));

    let sut = Sut {
        id,
        time,
        email,
        template,
        submission_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(FORM_JO.clone()).await;

    // Assert
    let outcome = result.unwrap();
    assert_matches!(
        outcome.delivery_error,
        Some(DeliveryError {
            kind: DeliveryErrorKind::Connection,
            ..
        })
    );
}

#[tokio::test]
async fn render_failed() {
    // Arrange
    let (id, time) = id_and_time();
    let template = MockTemplateService::new()
        .with_render_error(ContactNotificationTextTemplate(NOTIFICATION_JO.clone()));
    let submission_repo = MockSubmissionRepository::new().with_append(RECORD_JO.clone(), Ok(()));

    let sut = Sut {
        id,
        time,
        template,
        submission_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(FORM_JO.clone()).await;

    // Assert
    let outcome = result.unwrap();
    assert_eq!(
        outcome.delivery_error,
        Some(DeliveryError {
            kind: DeliveryErrorKind::Unknown,
            message: "Failed to render text notification: template rendering failed".into(),
        })
    );
}

#[tokio::test]
async fn log_failed() {
    // Arrange
    let (id, time) = id_and_time();
    let template = template_jo();
    let submission_repo = MockSubmissionRepository::new()
        .with_append(RECORD_JO.clone(), Err(anyhow!("disk full")));
    let email = MockEmailService::new()
        .with_ping(Ok(()))
        .with_send(EMAIL_JO.clone(), Ok(()));

    let sut = Sut {
        id,
        time,
        email,
        template,
        submission_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(FORM_JO.clone()).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactSubmissionOutcome {
            submission_id: SUBMISSION_ID_1.clone(),
            delivery_error: None,
        }
    );
}

#[tokio::test]
async fn log_and_send_failed() {
    // Arrange
    let (id, time) = id_and_time();
    let template = template_jo();
    let submission_repo = MockSubmissionRepository::new()
        .with_append(RECORD_JO.clone(), Err(anyhow!("disk full")));
    let email = MockEmailService::new()
        .with_ping(Err(EmailError::Connection("timed out".into())));

    let sut = Sut {
        id,
        time,
        email,
        template,
        submission_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(FORM_JO.clone()).await;

    // Assert
    let outcome = result.unwrap();
    assert_eq!(outcome.submission_id, *SUBMISSION_ID_1);
    assert!(!outcome.delivered());
}

#[tokio::test]
async fn missing_name() {
    // Arrange
    // none of the mocks expect a call
    let sut = Sut::default();

    // Act
    let result = sut
        .submit(ContactSubmissionForm {
            name: Some(String::new()),
            ..FORM_JO.clone()
        })
        .await;

    // Assert
    assert_matches!(
        result,
        Err(ContactSubmitError::Validation(
            ContactValidationError::MissingFields
        ))
    );
}

#[tokio::test]
async fn validation_errors_have_no_side_effects() {
    for (form, expected) in [
        (
            ContactSubmissionForm::default(),
            ContactValidationError::MissingFields,
        ),
        (
            ContactSubmissionForm {
                email: Some("not an email".into()),
                ..FORM_JO.clone()
            },
            ContactValidationError::InvalidEmail,
        ),
        (
            ContactSubmissionForm {
                name: Some("J".into()),
                ..FORM_JO.clone()
            },
            ContactValidationError::InvalidNameLength,
        ),
        (
            ContactSubmissionForm {
                subject: Some("Hey".into()),
                ..FORM_JO.clone()
            },
            ContactValidationError::InvalidSubjectLength,
        ),
        (
            ContactSubmissionForm {
                message: Some("m".repeat(2001)),
                ..FORM_JO.clone()
            },
            ContactValidationError::InvalidMessageLength,
        ),
    ] {
        // Arrange
        let sut = Sut::default();

        // Act
        let result = sut.submit(form).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Validation(err)) if *err == expected);
    }
}
