use std::future::Future;

use portfolio_models::contact::{ContactMessage, ContactMessageDraft, ContactMessageId};
use thiserror::Error;

/// The contact inbox.
///
/// Every mutating operation rewrites the whole stored collection. If that
/// write fails, the stored collection is left exactly as it was.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Store a new unread message with a fresh id and the current time.
    fn add_message(
        &self,
        draft: ContactMessageDraft,
    ) -> impl Future<Output = Result<ContactMessage, ContactAddMessageError>> + Send;

    /// Return all messages, oldest first.
    fn list_messages(&self) -> impl Future<Output = anyhow::Result<Vec<ContactMessage>>> + Send;

    /// Mark the message with the given id as read.
    ///
    /// Marking a message that is already read is not an error.
    fn mark_message_read(
        &self,
        id: &ContactMessageId,
    ) -> impl Future<Output = Result<ContactMessage, ContactMarkMessageReadError>> + Send;

    /// Remove the message with the given id and return it.
    ///
    /// Callers are expected to have asked for confirmation.
    fn delete_message(
        &self,
        id: &ContactMessageId,
    ) -> impl Future<Output = Result<ContactMessage, ContactDeleteMessageError>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_list_messages(mut self, result: Vec<ContactMessage>) -> Self {
        self.expect_list_messages()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(result))));
        self
    }
}

#[derive(Debug, Error)]
pub enum ContactAddMessageError {
    #[error("Storage limit reached! Remove some messages.")]
    StorageFull,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ContactMarkMessageReadError {
    #[error("Message not found.")]
    NotFound,
    #[error("Storage limit reached! Remove some messages.")]
    StorageFull,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ContactDeleteMessageError {
    #[error("Message not found.")]
    NotFound,
    #[error("Storage limit reached! Remove some messages.")]
    StorageFull,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
