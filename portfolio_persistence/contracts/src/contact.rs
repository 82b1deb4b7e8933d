use std::future::Future;

use portfolio_models::contact::ContactMessage;

use crate::PersistError;

/// Storage of all contact messages as one collection.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactMessageRepository: Send + Sync + 'static {
    /// Return all stored messages in the order they were added.
    ///
    /// Records written by older versions are completed on the fly: a missing
    /// `id` is derived from the record, a missing `read` flag is `false`.
    fn list(&self) -> impl Future<Output = anyhow::Result<Vec<ContactMessage>>> + Send;

    /// Replace the stored collection with `messages`.
    fn save(
        &self,
        messages: &[ContactMessage],
    ) -> impl Future<Output = Result<(), PersistError>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactMessageRepository {
    pub fn with_list(mut self, result: Vec<ContactMessage>) -> Self {
        self.expect_list()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_save(mut self, messages: Vec<ContactMessage>) -> Self {
        self.expect_save()
            .once()
            .withf(move |x| x == messages.as_slice())
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_save_quota_exceeded(mut self) -> Self {
        self.expect_save()
            .once()
            .return_once(|_| Box::pin(std::future::ready(Err(PersistError::QuotaExceeded))));
        self
    }
}
