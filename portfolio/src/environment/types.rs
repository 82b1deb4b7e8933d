use portfolio_core_contact_impl::ContactFeatureServiceImpl;
use portfolio_core_moderation_impl::ModerationServiceImpl;
use portfolio_core_testimonial_impl::TestimonialFeatureServiceImpl;
use portfolio_persistence_local::{
    contact::LocalContactMessageRepository, testimonial::LocalTestimonialRepository,
};
use portfolio_shared_impl::{id::IdServiceImpl, image::ImageServiceImpl, time::TimeServiceImpl};
use portfolio_store_local::FileStore;

// Store
pub type Store = FileStore;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;
pub type Image = ImageServiceImpl;

// Persistence
pub type ContactMessageRepo = LocalContactMessageRepository<Store, Id>;
pub type TestimonialRepo = LocalTestimonialRepository<Store>;

// Core
pub type Contact = ContactFeatureServiceImpl<Id, Time, ContactMessageRepo>;
pub type Testimonial = TestimonialFeatureServiceImpl<Time, Image, TestimonialRepo>;
pub type Moderation = ModerationServiceImpl;
