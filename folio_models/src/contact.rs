use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;

use crate::email_address::EmailAddress;

/// Raw contact form input as received from a client.
///
/// Every field is optional here; presence is checked by the contact feature
/// before anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmissionForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: ContactEmail,
}

/// Lengths are measured in UTF-16 code units, the way browsers count the
/// characters of a form field.
#[nutype(
    validate(predicate = |x| (2..=100).contains(&utf16_len(x))),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    validate(predicate = |x| (5..=200).contains(&utf16_len(x))),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageSubject(String);

#[nutype(
    validate(predicate = |x| (10..=2000).contains(&utf16_len(x))),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Sender address as typed into the contact form.
///
/// Deliberately looser than [`EmailAddress`]: anything of the shape
/// `local@domain.tld` without whitespace is accepted.
#[nutype(
    validate(regex = CONTACT_EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct ContactEmail(String);

pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

impl ContactEmail {
    /// Converts the address into a deliverable [`EmailAddress`], if the
    /// stricter RFC 5322 parser accepts it.
    pub fn to_email_address(&self) -> Option<EmailAddress> {
        self.parse().ok()
    }
}
