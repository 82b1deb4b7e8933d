use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use portfolio_models::testimonial::{SocialSite, Testimonial, TestimonialDraft};

use crate::SCREENSHOT;

pub static ALL_TESTIMONIALS: LazyLock<Vec<&Testimonial>> = LazyLock::new(|| vec![&BEN]);

pub static BEN_DRAFT: LazyLock<TestimonialDraft> = LazyLock::new(|| TestimonialDraft {
    client_name: "Ben".into(),
    social_handle: "@ben".into(),
    social_site: SocialSite::LinkedIn,
    description: "Excellent".into(),
    image: Some(SCREENSHOT.into()),
});

pub static BEN: LazyLock<Testimonial> = LazyLock::new(|| Testimonial {
    client_name: "Ben".into(),
    social_handle: "@ben".into(),
    social_site: SocialSite::LinkedIn,
    description: "Excellent".into(),
    image: Some(SCREENSHOT.into()),
    timestamp: Utc.with_ymd_and_hms(2024, 5, 12, 8, 0, 0).unwrap(),
});

pub static CLARA_DRAFT: LazyLock<TestimonialDraft> = LazyLock::new(|| TestimonialDraft {
    client_name: "Clara".into(),
    social_handle: "@clara_designs".into(),
    social_site: SocialSite::Behance,
    description: "Fast, friendly and the landing page converts twice as well as before."
        .into(),
    image: Some(SCREENSHOT.into()),
});
