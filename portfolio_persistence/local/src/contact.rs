use anyhow::Context;
use chrono::{DateTime, Utc};
use portfolio_models::contact::{ContactMessage, ContactMessageId};
use portfolio_persistence_contracts::{contact::ContactMessageRepository, PersistError};
use portfolio_shared_contracts::id::IdService;
use portfolio_store_contracts::StoreService;
use serde::Deserialize;
use tracing::debug;

use crate::{save_collection, CONTACT_MESSAGES_KEY};

#[derive(Debug, Clone)]
pub struct LocalContactMessageRepository<Store, Id> {
    store: Store,
    id: Id,
}

impl<Store, Id> LocalContactMessageRepository<Store, Id> {
    pub fn new(store: Store, id: Id) -> Self {
        Self { store, id }
    }
}

/// A message as written by any version of the site.
#[derive(Debug, Deserialize)]
struct StoredContactMessage {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    read: Option<bool>,
}

impl StoredContactMessage {
    fn into_message(self, index: usize, id_service: &impl IdService) -> ContactMessage {
        let timestamp = self.timestamp.unwrap_or_else(|| {
            debug!(index, "Legacy message has no timestamp");
            DateTime::<Utc>::UNIX_EPOCH
        });

        let id = match self.id.filter(|id| !id.is_empty()) {
            Some(id) => ContactMessageId::from(id),
            None => {
                let seed = format!(
                    "{index}\0{}\0{}\0{}\0{}",
                    timestamp.to_rfc3339(),
                    self.name,
                    self.email,
                    self.message
                );
                let id: ContactMessageId = id_service.derive(seed.as_bytes());
                debug!(%id, index, "Assigned id to legacy message");
                id
            }
        };

        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            timestamp,
            read: self.read.unwrap_or(false),
        }
    }
}

impl<Store, Id> ContactMessageRepository for LocalContactMessageRepository<Store, Id>
where
    Store: StoreService,
    Id: IdService,
{
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> anyhow::Result<Vec<ContactMessage>> {
        let Some(json) = self.store.get(CONTACT_MESSAGES_KEY).await? else {
            return Ok(Vec::new());
        };

        let stored = serde_json::from_str::<Vec<StoredContactMessage>>(&json)
            .context("Failed to parse stored contact messages")?;

        Ok(stored
            .into_iter()
            .enumerate()
            .map(|(index, message)| message.into_message(index, &self.id))
            .collect())
    }

    #[tracing::instrument(skip(self, messages), fields(count = messages.len()))]
    async fn save(&self, messages: &[ContactMessage]) -> Result<(), PersistError> {
        save_collection(&self.store, CONTACT_MESSAGES_KEY, messages).await
    }
}
