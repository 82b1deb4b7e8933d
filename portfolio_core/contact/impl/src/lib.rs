use std::sync::Arc;

use portfolio_core_contact_contracts::{
    ContactAddMessageError, ContactDeleteMessageError, ContactFeatureService,
    ContactMarkMessageReadError,
};
use portfolio_models::contact::{ContactMessage, ContactMessageDraft, ContactMessageId};
use portfolio_persistence_contracts::{contact::ContactMessageRepository, PersistError};
use portfolio_shared_contracts::{id::IdService, time::TimeService};
use tokio::sync::Mutex;
use tracing::info;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default)]
pub struct ContactFeatureServiceImpl<Id, Time, MessageRepo> {
    id: Id,
    time: Time,
    message_repo: MessageRepo,
    /// Serializes read-modify-write cycles on the stored collection.
    write_lock: Arc<Mutex<()>>,
}

impl<Id, Time, MessageRepo> ContactFeatureServiceImpl<Id, Time, MessageRepo> {
    pub fn new(id: Id, time: Time, message_repo: MessageRepo) -> Self {
        Self {
            id,
            time,
            message_repo,
            write_lock: Default::default(),
        }
    }
}

impl<Id, Time, MessageRepo> ContactFeatureService
    for ContactFeatureServiceImpl<Id, Time, MessageRepo>
where
    Id: IdService,
    Time: TimeService,
    MessageRepo: ContactMessageRepository,
{
    #[tracing::instrument(skip(self, draft))]
    async fn add_message(
        &self,
        draft: ContactMessageDraft,
    ) -> Result<ContactMessage, ContactAddMessageError> {
        let _guard = self.write_lock.lock().await;

        let mut messages = self.message_repo.list().await?;
        let message = draft.into_message(self.id.generate(), self.time.now());
        messages.push(message.clone());

        self.message_repo
            .save(&messages)
            .await
            .map_err(|err| match err {
                PersistError::QuotaExceeded => ContactAddMessageError::StorageFull,
                PersistError::Other(err) => err.into(),
            })?;

        info!(id = %message.id, "New contact message");
        Ok(message)
    }

    #[tracing::instrument(skip(self))]
    async fn list_messages(&self) -> anyhow::Result<Vec<ContactMessage>> {
        self.message_repo.list().await
    }

    #[tracing::instrument(skip(self))]
    async fn mark_message_read(
        &self,
        id: &ContactMessageId,
    ) -> Result<ContactMessage, ContactMarkMessageReadError> {
        let _guard = self.write_lock.lock().await;

        let mut messages = self.message_repo.list().await?;
        let message = messages
            .iter_mut()
            .find(|message| message.id == *id)
            .ok_or(ContactMarkMessageReadError::NotFound)?;
        message.read = true;
        let message = message.clone();

        self.message_repo
            .save(&messages)
            .await
            .map_err(|err| match err {
                PersistError::QuotaExceeded => ContactMarkMessageReadError::StorageFull,
                PersistError::Other(err) => err.into(),
            })?;

        Ok(message)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_message(
        &self,
        id: &ContactMessageId,
    ) -> Result<ContactMessage, ContactDeleteMessageError> {
        let _guard = self.write_lock.lock().await;

        let mut messages = self.message_repo.list().await?;
        let index = messages
            .iter()
            .position(|message| message.id == *id)
            .ok_or(ContactDeleteMessageError::NotFound)?;
        let message = messages.remove(index);

        self.message_repo
            .save(&messages)
            .await
            .map_err(|err| match err {
                PersistError::QuotaExceeded => ContactDeleteMessageError::StorageFull,
                PersistError::Other(err) => err.into(),
            })?;

        info!(%id, "Deleted contact message");
        Ok(message)
    }
}
