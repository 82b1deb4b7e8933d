use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use portfolio_models::contact::{ContactMessage, ContactMessageDraft};

use crate::{UUID1, UUID2};

pub static ALL_MESSAGES: LazyLock<Vec<&ContactMessage>> = LazyLock::new(|| vec![&ADA, &GRACE]);

pub static ADA_DRAFT: LazyLock<ContactMessageDraft> = LazyLock::new(|| ContactMessageDraft {
    name: "Ada".try_into().unwrap(),
    email: "a@x.com".parse().unwrap(),
    subject: "Hi".try_into().unwrap(),
    message: "Great work".try_into().unwrap(),
});

/// An unread message.
pub static ADA: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    id: UUID1.into(),
    name: "Ada".into(),
    email: "a@x.com".into(),
    subject: "Hi".into(),
    message: "Great work".into(),
    timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    read: false,
});

/// A message that has already been read.
pub static GRACE: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    id: UUID2.into(),
    name: "Grace".into(),
    email: "grace@example.com".into(),
    subject: String::new(),
    message: "Could you build a site for my bakery?".into(),
    timestamp: Utc.with_ymd_and_hms(2024, 5, 20, 17, 5, 0).unwrap(),
    read: true,
});
