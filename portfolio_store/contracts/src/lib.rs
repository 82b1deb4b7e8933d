use std::future::Future;

use thiserror::Error;

/// String-only key-value storage shared by all repositories.
///
/// All keys draw from the same capacity. Writes that would exceed it fail with
/// [`StoreSetError::QuotaExceeded`] and leave the previous value untouched.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait StoreService: Send + Sync + 'static {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;

    /// Creates or replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str)
        -> impl Future<Output = Result<(), StoreSetError>> + Send;

    /// Removes the value stored under `key`.
    ///
    /// Does nothing if there is no such value.
    fn remove(&self, key: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Error)]
pub enum StoreSetError {
    #[error("Storing {required} bytes would exceed the capacity of {capacity} bytes.")]
    QuotaExceeded { required: usize, capacity: usize },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Number of bytes an entry occupies in the store.
pub fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

#[cfg(feature = "mock")]
impl MockStoreService {
    pub fn with_get(mut self, key: &'static str, result: Option<String>) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::eq(key))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_set(mut self, key: &'static str, value: String) -> Self {
        self.expect_set()
            .once()
            .withf(move |k, v| k == key && v == value)
            .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_set_quota_exceeded(mut self, key: &'static str) -> Self {
        self.expect_set()
            .once()
            .with(mockall::predicate::eq(key), mockall::predicate::always())
            .return_once(move |_, value| {
                let required = entry_size(key, value);
                Box::pin(std::future::ready(Err(StoreSetError::QuotaExceeded {
                    required,
                    capacity: required - 1,
                })))
            });
        self
    }
}
