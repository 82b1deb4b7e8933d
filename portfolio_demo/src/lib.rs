use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use portfolio_persistence_contracts::{
    contact::ContactMessageRepository, testimonial::TestimonialRepository,
};
use uuid::{uuid, Uuid};

pub mod contact;
pub mod testimonial;

pub const UUID1: Uuid = uuid!("eb1cd87a-4475-4d68-a2c2-0216bdaac8f7");
pub const UUID2: Uuid = uuid!("0c5b1a7e-2f8d-4a36-9d0e-5e3f4b1c7a92");

/// A fixed "current time" for tests.
pub static NOW: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());

/// A tiny JPEG data URL standing in for a normalized screenshot.
pub const SCREENSHOT: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRgABAQAAAQABAAD/2Q==";

/// Stores all demo messages and submitted testimonials.
pub async fn create(
    messages: &impl ContactMessageRepository,
    testimonials: &impl TestimonialRepository,
) -> anyhow::Result<()> {
    let all_messages = contact::ALL_MESSAGES
        .iter()
        .map(|&x| x.clone())
        .collect::<Vec<_>>();
    messages.save(&all_messages).await?;

    let all_testimonials = testimonial::ALL_TESTIMONIALS
        .iter()
        .map(|&x| x.clone())
        .collect::<Vec<_>>();
    testimonials.save(&all_testimonials).await?;

    Ok(())
}
