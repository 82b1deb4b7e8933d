use portfolio_persistence_contracts::testimonial::MockTestimonialRepository;
use portfolio_shared_contracts::{image::MockImageService, time::MockTimeService};

use crate::TestimonialFeatureServiceImpl;

mod list_testimonials;

type Sut = TestimonialFeatureServiceImpl<MockTimeService, MockImageService, MockTestimonialRepository>;
