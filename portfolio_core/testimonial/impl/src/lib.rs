use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use baseline::{baseline_testimonials, is_baseline};
use portfolio_core_testimonial_contracts::{TestimonialAddError, TestimonialFeatureService};
use portfolio_models::{
    image::ImageDataUrl,
    testimonial::{Testimonial, TestimonialDraft},
};
use portfolio_persistence_contracts::{testimonial::TestimonialRepository, PersistError};
use portfolio_shared_contracts::{
    image::{ImageNormalizeError, ImageService},
    time::TimeService,
};
use tokio::sync::Mutex;
use tracing::{debug, info};

pub mod baseline;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default)]
pub struct TestimonialFeatureServiceImpl<Time, Image, TestimonialRepo> {
    time: Time,
    image: Image,
    testimonial_repo: TestimonialRepo,
    /// Serializes read-modify-write cycles on the stored collection.
    write_lock: Arc<Mutex<()>>,
    uploads: Arc<AtomicUsize>,
}

impl<Time, Image, TestimonialRepo> TestimonialFeatureServiceImpl<Time, Image, TestimonialRepo> {
    pub fn new(time: Time, image: Image, testimonial_repo: TestimonialRepo) -> Self {
        Self {
            time,
            image,
            testimonial_repo,
            write_lock: Default::default(),
            uploads: Default::default(),
        }
    }
}

impl<Time, Image, TestimonialRepo> TestimonialFeatureService
    for TestimonialFeatureServiceImpl<Time, Image, TestimonialRepo>
where
    Time: TimeService,
    Image: ImageService,
    TestimonialRepo: TestimonialRepository,
{
    #[tracing::instrument(skip(self, draft), fields(client_name = %draft.client_name))]
    async fn add_testimonial(
        &self,
        draft: TestimonialDraft,
    ) -> Result<Testimonial, TestimonialAddError> {
        if !draft.is_complete() {
            return Err(TestimonialAddError::Incomplete);
        }

        let _guard = self.write_lock.lock().await;

        let mut stored = self.testimonial_repo.list().await?;
        let now = self.time.now();
        let baseline = baseline_testimonials(now);

        if baseline
            .iter()
            .chain(&stored)
            .any(|x| x.is_same_as(&draft.client_name, &draft.description))
        {
            debug!("Rejected duplicate testimonial");
            return Err(TestimonialAddError::Duplicate);
        }

        let testimonial = draft.into_testimonial(now);
        stored.push(testimonial.clone());
        stored.retain(|x| !is_baseline(&baseline, x));

        self.testimonial_repo
            .save(&stored)
            .await
            .map_err(|err| match err {
                PersistError::QuotaExceeded => TestimonialAddError::StorageFull,
                PersistError::Other(err) => err.into(),
            })?;

        info!(count = stored.len(), "New testimonial");
        Ok(testimonial)
    }

    #[tracing::instrument(skip(self))]
    async fn list_testimonials(&self) -> anyhow::Result<Vec<Testimonial>> {
        let stored = self.testimonial_repo.list().await?;
        let mut testimonials = baseline_testimonials(self.time.now());
        testimonials.extend(stored);
        Ok(testimonials)
    }

    #[tracing::instrument(skip(self, data), fields(len = ?data.as_ref().map(Vec::len)))]
    async fn upload_screenshot(
        &self,
        data: Option<Vec<u8>>,
    ) -> Result<Option<ImageDataUrl>, ImageNormalizeError> {
        let Some(data) = data else {
            return Ok(None);
        };

        let _upload = UploadGuard::new(&self.uploads);
        self.image.normalize(data).await.map(Some)
    }

    fn is_uploading(&self) -> bool {
        self.uploads.load(Ordering::SeqCst) > 0
    }
}

/// Counts an upload as in progress until dropped, even if the future
/// driving it is cancelled.
struct UploadGuard<'a>(&'a AtomicUsize);

impl<'a> UploadGuard<'a> {
    fn new(uploads: &'a AtomicUsize) -> Self {
        uploads.fetch_add(1, Ordering::SeqCst);
        Self(uploads)
    }
}

impl Drop for UploadGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
