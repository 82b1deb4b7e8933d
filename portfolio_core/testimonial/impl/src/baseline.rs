use chrono::{DateTime, TimeDelta, Utc};
use portfolio_models::testimonial::{SocialSite, Testimonial};

/// Testimonials that ship with the site. They are always listed first and
/// are never written to the store.
pub fn baseline_testimonials(now: DateTime<Utc>) -> Vec<Testimonial> {
    [
        (
            "Berenice",
            "@berenice",
            SocialSite::LinkedIn,
            "Claris delivered a top-notch portfolio website that perfectly showcases my work. \
             The design is clean, professional, and visually stunning. Highly recommended!",
            "/images/expense-tracker.jpg",
            30,
        ),
        (
            "Mr. Wabo",
            "@mrwabo",
            SocialSite::WhatsApp,
            "The web development project was completed ahead of schedule with exceptional \
             quality. Claris’s attention to detail and creativity made a huge difference in our \
             online presence.",
            "/images/weather-dashboard.jpg",
            60,
        ),
        (
            "Julius",
            "@julius_Ai",
            SocialSite::Behance,
            "Working with Claris was a pleasure! The UI/UX design enhancements she implemented \
             made my portfolio interactive, modern, and visually engaging.",
            "/images/react-django-app.jpg",
            90,
        ),
        (
            "Doris",
            "@dorisgold",
            SocialSite::WhatsApp,
            "Claris brought my ideas to life with creative solutions and responsive design. My \
             portfolio now looks professional across all devices. Fantastic work!",
            "/images/portfolio-website.jpg",
            15,
        ),
    ]
    .into_iter()
    .map(
        |(client_name, social_handle, social_site, description, image, days_ago)| Testimonial {
            client_name: client_name.into(),
            social_handle: social_handle.into(),
            social_site,
            description: description.into(),
            image: Some(image.into()),
            timestamp: now - TimeDelta::days(days_ago),
        },
    )
    .collect()
}

/// Returns `true` if `testimonial` is one of the built-in testimonials.
pub fn is_baseline(baseline: &[Testimonial], testimonial: &Testimonial) -> bool {
    baseline
        .iter()
        .any(|x| x.is_same_as(&testimonial.client_name, &testimonial.description))
}
