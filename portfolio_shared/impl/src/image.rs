use std::time::Duration;

use anyhow::{anyhow, Context};
use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, DynamicImage};
use portfolio_models::image::ImageDataUrl;
use portfolio_shared_contracts::image::{ImageNormalizeError, ImageService};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ImageServiceImpl {
    config: ImageServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ImageServiceConfig {
    /// Images wider than this are scaled down, preserving the aspect ratio.
    pub max_width: u32,
    /// JPEG quality in percent.
    pub quality: u8,
    /// Upper bound for decoding, scaling and encoding a single image.
    pub timeout: Duration,
}

impl ImageServiceImpl {
    pub fn new(config: ImageServiceConfig) -> Self {
        Self { config }
    }
}

impl ImageService for ImageServiceImpl {
    #[tracing::instrument(skip(self, data), fields(len = data.len()))]
    async fn normalize(&self, data: Vec<u8>) -> Result<ImageDataUrl, ImageNormalizeError> {
        let config = self.config.clone();
        let task = tokio::task::spawn_blocking(move || normalize(&data, &config));

        match tokio::time::timeout(self.config.timeout, task).await {
            Ok(result) => result.context("Image processing task failed")?,
            Err(_) => {
                warn!(timeout = ?self.config.timeout, "Image processing timed out");
                Err(ImageNormalizeError::Timeout)
            }
        }
    }
}

fn normalize(data: &[u8], config: &ImageServiceConfig) -> Result<ImageDataUrl, ImageNormalizeError> {
    let image = image::load_from_memory(data).map_err(|err| ImageNormalizeError::Decode(err.into()))?;
    if image.width() == 0 || image.height() == 0 {
        return Err(ImageNormalizeError::Decode(anyhow!("Image has no pixels")));
    }

    let (width, height) = target_size(image.width(), image.height(), config.max_width);
    debug!(
        from = ?(image.width(), image.height()),
        to = ?(width, height),
        "Scaling image"
    );
    let image = if (width, height) == (image.width(), image.height()) {
        image
    } else {
        image.resize_exact(width, height, FilterType::Triangle)
    };

    encode_jpeg(&image, config.quality).map(|jpeg| ImageDataUrl::encode("image/jpeg", &jpeg))
}

/// Scales `width` down to `max_width` and `height` by the same factor. Images
/// that already fit are kept at their native size.
fn target_size(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    let max_width = max_width.max(1);
    if width <= max_width {
        return (width, height);
    }

    let scale = f64::from(max_width) / f64::from(width);
    let height = (f64::from(height) * scale).round().max(1.0) as u32;
    (max_width, height)
}

fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>, ImageNormalizeError> {
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
        .encode_image(&image.to_rgb8())
        .map_err(|err| ImageNormalizeError::Encode(err.into()))?;
    Ok(out)
}
