use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;
use portfolio_store_contracts::{StoreService, StoreSetError};

use crate::{check_quota, Entries};

/// Store that lives only as long as the process. Clones share their entries.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: Arc<Mutex<Entries>>,
    capacity: usize,
}

impl MemoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Default::default(),
            capacity,
        }
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, Entries>> {
        self.entries
            .lock()
            .map_err(|_| anyhow!("Memory store lock is poisoned"))
    }
}

impl StoreService for MemoryStore {
    #[tracing::instrument(skip(self))]
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    #[tracing::instrument(skip(self, value), fields(len = value.len()))]
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreSetError> {
        let mut entries = self.lock()?;
        check_quota(&entries, key, value, self.capacity)?;
        entries.insert(key.into(), value.into());
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
