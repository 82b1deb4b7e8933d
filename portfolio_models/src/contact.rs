use chrono::{DateTime, Utc};
use nutype::nutype;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::email_address::EmailAddress;

/// Opaque identifier of a contact message.
///
/// New messages receive a UUID, but identifiers written by older versions of
/// the site are arbitrary short strings, so the inner value is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactMessageId(String);

impl ContactMessageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for ContactMessageId {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ContactMessageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ContactMessageId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl std::fmt::Display for ContactMessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A message submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

/// The validated contents of the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageDraft {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
    pub subject: ContactMessageSubject,
    pub message: ContactMessageContent,
}

impl ContactMessageDraft {
    pub fn into_message(
        self,
        id: ContactMessageId,
        timestamp: DateTime<Utc>,
    ) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name.into_inner(),
            email: self.email.as_str().into(),
            subject: self.subject.into_inner(),
            message: self.message.into_inner(),
            timestamp,
            read: false,
        }
    }
}

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    sanitize(trim),
    validate(len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageSubject(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);
