//! Repositories that keep each collection as a JSON array under a single key
//! of the local store.

use anyhow::Context;
use portfolio_persistence_contracts::PersistError;
use portfolio_store_contracts::{StoreService, StoreSetError};
use serde::Serialize;
use tracing::warn;

pub mod contact;
pub mod testimonial;

/// Store key of the contact message collection.
pub const CONTACT_MESSAGES_KEY: &str = "portfolioMessages";

/// Store key of the submitted testimonials.
pub const TESTIMONIALS_KEY: &str = "portfolioTestimonials";

async fn save_collection<T: Serialize + Sync>(
    store: &impl StoreService,
    key: &str,
    items: &[T],
) -> Result<(), PersistError> {
    let json = serde_json::to_string(items).context("Failed to serialize collection")?;
    store.set(key, &json).await.map_err(|err| match err {
        StoreSetError::QuotaExceeded { required, capacity } => {
            warn!(key, required, capacity, "Storage limit reached");
            PersistError::QuotaExceeded
        }
        StoreSetError::Other(err) => PersistError::Other(err),
    })
}

#[cfg(test)]
mod tests {
    use portfolio_demo::{contact::ADA, testimonial::BEN};
    use portfolio_persistence_contracts::{
        contact::ContactMessageRepository, testimonial::TestimonialRepository,
    };
    use portfolio_shared_contracts::id::MockIdService;
    use portfolio_store_contracts::MockStoreService;
    use portfolio_utils::assert_matches;

    use super::*;
    use crate::{contact::LocalContactMessageRepository, testimonial::LocalTestimonialRepository};

    #[tokio::test]
    async fn save_writes_json_array() {
        // Arrange
        let json = serde_json::to_string(&[BEN.clone()]).unwrap();
        let store = MockStoreService::new().with_set(TESTIMONIALS_KEY, json);

        let sut = LocalTestimonialRepository::new(store);

        // Act
        let result = sut.save(&[BEN.clone()]).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn save_quota_exceeded() {
        // Arrange
        let store = MockStoreService::new().with_set_quota_exceeded(CONTACT_MESSAGES_KEY);

        let sut = LocalContactMessageRepository::new(store, MockIdService::new());

        // Act
        let result = sut.save(&[ADA.clone()]).await;

        // Assert
        assert_matches!(result, Err(PersistError::QuotaExceeded));
    }

    #[tokio::test]
    async fn list_missing_collection() {
        // Arrange
        let store = MockStoreService::new().with_get(CONTACT_MESSAGES_KEY, None);

        let sut = LocalContactMessageRepository::new(store, MockIdService::new());

        // Act
        let result = sut.list().await;

        // Assert
        assert!(result.unwrap().is_empty());
    }
}
