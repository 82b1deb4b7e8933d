use portfolio_models::testimonial::Testimonial;
use portfolio_persistence_contracts::{testimonial::TestimonialRepository, PersistError};
use portfolio_store_contracts::StoreService;
use tracing::error;

use crate::{save_collection, TESTIMONIALS_KEY};

#[derive(Debug, Clone)]
pub struct LocalTestimonialRepository<Store> {
    store: Store,
}

impl<Store> LocalTestimonialRepository<Store> {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl<Store: StoreService> TestimonialRepository for LocalTestimonialRepository<Store> {
    /// An unreadable collection is logged and treated as empty, so that the
    /// built-in testimonials can still be shown.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> anyhow::Result<Vec<Testimonial>> {
        let Some(json) = self.store.get(TESTIMONIALS_KEY).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&json) {
            Ok(testimonials) => Ok(testimonials),
            Err(err) => {
                error!("Failed to parse stored testimonials: {err}");
                Ok(Vec::new())
            }
        }
    }

    #[tracing::instrument(skip(self, testimonials), fields(count = testimonials.len()))]
    async fn save(&self, testimonials: &[Testimonial]) -> Result<(), PersistError> {
        save_collection(&self.store, TESTIMONIALS_KEY, testimonials).await
    }
}
