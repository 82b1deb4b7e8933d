use std::future::Future;

use portfolio_models::testimonial::Testimonial;

use crate::PersistError;

/// Storage of the testimonials submitted by visitors.
///
/// The built-in testimonials are never written here.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TestimonialRepository: Send + Sync + 'static {
    /// Return all stored testimonials in the order they were added.
    fn list(&self) -> impl Future<Output = anyhow::Result<Vec<Testimonial>>> + Send;

    /// Replace the stored collection with `testimonials`.
    fn save(
        &self,
        testimonials: &[Testimonial],
    ) -> impl Future<Output = Result<(), PersistError>> + Send;
}

#[cfg(feature = "mock")]
impl MockTestimonialRepository {
    pub fn with_list(mut self, result: Vec<Testimonial>) -> Self {
        self.expect_list()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_save(mut self, testimonials: Vec<Testimonial>) -> Self {
        self.expect_save()
            .once()
            .withf(move |x| x == testimonials.as_slice())
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
