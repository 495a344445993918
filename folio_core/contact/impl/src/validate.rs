use folio_core_contact_contracts::ContactValidationError;
use folio_models::contact::{
    ContactEmail, ContactMessage, ContactMessageAuthor, ContactMessageAuthorName,
    ContactMessageContent, ContactMessageSubject, ContactSubmissionForm,
};

/// Turns a raw form into a [`ContactMessage`]. The first failing check wins.
pub(crate) fn validate(form: ContactSubmissionForm) -> Result<ContactMessage, ContactValidationError> {
    let (Some(name), Some(email), Some(subject), Some(content)) = (
        present(form.name),
        present(form.email),
        present(form.subject),
        present(form.message),
    ) else {
        return Err(ContactValidationError::MissingFields);
    };

    let email =
        ContactEmail::try_new(email).map_err(|_| ContactValidationError::InvalidEmail)?;
    let name = ContactMessageAuthorName::try_new(name)
        .map_err(|_| ContactValidationError::InvalidNameLength)?;
    let subject = ContactMessageSubject::try_new(subject)
        .map_err(|_| ContactValidationError::InvalidSubjectLength)?;
    let content = ContactMessageContent::try_new(content)
        .map_err(|_| ContactValidationError::InvalidMessageLength)?;

    Ok(ContactMessage {
        author: ContactMessageAuthor { name, email },
        subject,
        content,
    })
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|x| !x.is_empty())
}
