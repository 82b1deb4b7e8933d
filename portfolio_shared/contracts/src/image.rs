use std::future::Future;

use portfolio_models::image::ImageDataUrl;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ImageService: Send + Sync + 'static {
    /// Decodes an uploaded image, scales it down to the configured maximum
    /// width and re-encodes it as a JPEG data URL.
    fn normalize(
        &self,
        data: Vec<u8>,
    ) -> impl Future<Output = Result<ImageDataUrl, ImageNormalizeError>> + Send;
}

#[derive(Debug, Error)]
pub enum ImageNormalizeError {
    #[error("The uploaded file could not be read as an image.")]
    Decode(#[source] anyhow::Error),
    #[error("The image could not be compressed.")]
    Encode(#[source] anyhow::Error),
    #[error("Processing the image took too long.")]
    Timeout,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockImageService {
    pub fn with_normalize(mut self, data: Vec<u8>, result: ImageDataUrl) -> Self {
        self.expect_normalize()
            .once()
            .with(mockall::predicate::eq(data))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_normalize_error(mut self, error: ImageNormalizeError) -> Self {
        self.expect_normalize()
            .once()
            .return_once(|_| Box::pin(std::future::ready(Err(error))));
        self
    }
}
