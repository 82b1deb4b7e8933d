use portfolio_config::{Config, ImageConfig, ModerationConfig};
use portfolio_core_contact_impl::ContactFeatureServiceImpl;
use portfolio_core_moderation_impl::{ModerationServiceConfig, ModerationServiceImpl};
use portfolio_core_testimonial_impl::TestimonialFeatureServiceImpl;
use portfolio_persistence_local::{
    contact::LocalContactMessageRepository, testimonial::LocalTestimonialRepository,
};
use portfolio_shared_impl::{
    id::IdServiceImpl,
    image::{ImageServiceConfig, ImageServiceImpl},
    time::TimeServiceImpl,
};
use types::{Contact, Image, Moderation, Store, Testimonial};

use crate::store;

pub mod types;

/// All services of one session, wired to a single store.
#[derive(Debug, Clone)]
pub struct Environment {
    pub store: Store,
    pub contact: Contact,
    pub testimonial: Testimonial,
    pub moderation: Moderation,
}

impl Environment {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let store = store::open(&config.store).await?;
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: &Config, store: Store) -> Self {
        let contact = ContactFeatureServiceImpl::new(
            IdServiceImpl,
            TimeServiceImpl,
            LocalContactMessageRepository::new(store.clone(), IdServiceImpl),
        );

        let testimonial = TestimonialFeatureServiceImpl::new(
            TimeServiceImpl,
            image_service(&config.image),
            LocalTestimonialRepository::new(store.clone()),
        );

        Self {
            store,
            contact,
            testimonial,
            moderation: moderation_service(&config.moderation),
        }
    }
}

pub fn image_service(config: &ImageConfig) -> Image {
    ImageServiceImpl::new(ImageServiceConfig {
        max_width: config.max_width,
        quality: config.quality,
        timeout: config.timeout.into(),
    })
}

fn moderation_service(config: &ModerationConfig) -> Moderation {
    ModerationServiceImpl::new(ModerationServiceConfig {
        passphrase: config.passphrase.as_str().into(),
    })
}
