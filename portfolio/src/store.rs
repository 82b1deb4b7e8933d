use portfolio_config::StoreConfig;
use portfolio_store_local::{FileStore, FileStoreConfig};

pub async fn open(config: &StoreConfig) -> anyhow::Result<FileStore> {
    FileStore::open(&FileStoreConfig {
        path: config.path.clone(),
        capacity: config.capacity,
    })
    .await
}
