use std::future::Future;

use portfolio_models::{
    image::ImageDataUrl,
    testimonial::{Testimonial, TestimonialDraft},
};
use portfolio_shared_contracts::image::ImageNormalizeError;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TestimonialFeatureService: Send + Sync + 'static {
    /// Store a new testimonial stamped with the current time.
    ///
    /// The draft must be complete and must not match an existing testimonial
    /// (built-in or stored) by client name and description. Nothing is
    /// written if any of these checks fails.
    fn add_testimonial(
        &self,
        draft: TestimonialDraft,
    ) -> impl Future<Output = Result<Testimonial, TestimonialAddError>> + Send;

    /// Return the built-in testimonials followed by the stored ones in the
    /// order they were added.
    fn list_testimonials(&self) -> impl Future<Output = anyhow::Result<Vec<Testimonial>>> + Send;

    /// Normalize an uploaded screenshot for use in a draft.
    ///
    /// Returns `None` without doing anything if no file was selected. While
    /// the image is being processed, [`is_uploading`](Self::is_uploading)
    /// returns `true`.
    fn upload_screenshot(
        &self,
        data: Option<Vec<u8>>,
    ) -> impl Future<Output = Result<Option<ImageDataUrl>, ImageNormalizeError>> + Send;

    /// Whether a screenshot is currently being processed.
    fn is_uploading(&self) -> bool;
}

#[cfg(feature = "mock")]
impl MockTestimonialFeatureService {
    pub fn with_list_testimonials(mut self, result: Vec<Testimonial>) -> Self {
        self.expect_list_testimonials()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(result))));
        self
    }
}

#[derive(Debug, Error)]
pub enum TestimonialAddError {
    #[error("Please provide all testimonial details and screenshot.")]
    Incomplete,
    #[error("This testimonial already exists.")]
    Duplicate,
    #[error("Storage limit reached! Remove some testimonials.")]
    StorageFull,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
