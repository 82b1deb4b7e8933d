use std::{
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use portfolio_store_contracts::{StoreService, StoreSetError};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{check_quota, usage, Entries};

/// Store that keeps all entries in a single JSON document on disk.
///
/// Writes replace the document atomically, so a failed write never leaves a
/// partially written file behind. Writers within one process are serialized.
/// Concurrent processes sharing the same file are not coordinated: each
/// writer stages its document in its own temporary file, and the last one
/// to be renamed into place wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    path: PathBuf,
    capacity: usize,
    lock: Mutex<()>,
}

#[derive(Debug, Clone)]
pub struct FileStoreConfig {
    pub path: PathBuf,
    pub capacity: usize,
}

impl FileStore {
    /// Opens the store at the configured path, creating parent directories as
    /// needed. An existing document must be readable.
    pub async fn open(config: &FileStoreConfig) -> anyhow::Result<Self> {
        if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create store directory {}", parent.display())
            })?;
        }

        let store = Self {
            inner: Arc::new(Inner {
                path: config.path.clone(),
                capacity: config.capacity,
                lock: Mutex::new(()),
            }),
        };

        let entries = store.read().await?;
        info!(
            path = %config.path.display(),
            entries = entries.len(),
            used = usage(&entries),
            capacity = config.capacity,
            "Opened local store"
        );

        Ok(store)
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Number of bytes currently used by all entries.
    pub async fn usage(&self) -> anyhow::Result<usize> {
        let _guard = self.inner.lock.lock().await;
        self.read().await.map(|entries| usage(&entries))
    }

    async fn read(&self) -> anyhow::Result<Entries> {
        let path = &self.inner.path;
        match tokio::fs::read(path).await {
            Ok(data) => serde_json::from_slice(&data)
                .with_context(|| format!("Failed to parse store document {}", path.display())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Entries::new()),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read store document {}", path.display())),
        }
    }

    async fn write(&self, entries: &Entries) -> anyhow::Result<()> {
        let path = self.inner.path.clone();
        let data = serde_json::to_vec(entries).context("Failed to serialize store document")?;

        tokio::task::spawn_blocking(move || replace_document(&path, &data)).await?
    }
}

fn replace_document(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(data)
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace store document {}", path.display()))?;
    Ok(())
}

impl StoreService for FileStore {
    #[tracing::instrument(skip(self))]
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let _guard = self.inner.lock.lock().await;
        let mut entries = self.read().await?;
        Ok(entries.remove(key))
    }

    #[tracing::instrument(skip(self, value), fields(len = value.len()))]
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreSetError> {
        let _guard = self.inner.lock.lock().await;
        let mut entries = self.read().await?;
        check_quota(&entries, key, value, self.inner.capacity)?;

        entries.insert(key.into(), value.into());
        self.write(&entries).await?;
        debug!(used = usage(&entries), "Stored entry");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let _guard = self.inner.lock.lock().await;
        let mut entries = self.read().await?;
        if entries.remove(key).is_some() {
            self.write(&entries).await?;
        }
        Ok(())
    }
}
