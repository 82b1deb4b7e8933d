use std::{borrow::Cow, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The platform a testimonial's author can be reached on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialSite {
    #[default]
    LinkedIn,
    Twitter,
    WhatsApp,
    Behance,
}

impl SocialSite {
    pub const ALL: [Self; 4] = [Self::LinkedIn, Self::Twitter, Self::WhatsApp, Self::Behance];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::WhatsApp => "WhatsApp",
            Self::Behance => "Behance",
        }
    }
}

impl std::fmt::Display for SocialSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown social site {0:?}, expected one of LinkedIn, Twitter, WhatsApp or Behance.")]
pub struct ParseSocialSiteError(String);

impl FromStr for SocialSite {
    type Err = ParseSocialSiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|site| site.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSocialSiteError(s.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub client_name: String,
    pub social_handle: String,
    pub social_site: SocialSite,
    pub description: String,
    /// A data URL of the normalized screenshot, or a site-relative path for
    /// the built-in testimonials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Testimonial {
    /// Number of characters shown before a description is cut off.
    pub const EXCERPT_LEN: usize = 40;

    /// Two testimonials are considered the same if both the client name and
    /// the description match exactly.
    pub fn is_same_as(&self, client_name: &str, description: &str) -> bool {
        self.client_name == client_name && self.description == description
    }

    /// Returns the first `max_chars` characters of the description followed
    /// by `...` if the description is longer than that.
    pub fn excerpt(&self, max_chars: usize) -> Cow<'_, str> {
        match self.description.char_indices().nth(max_chars) {
            Some((end, _)) => format!("{}...", &self.description[..end]).into(),
            None => Cow::Borrowed(&self.description),
        }
    }
}

/// The unvalidated contents of the testimonial form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestimonialDraft {
    pub client_name: String,
    pub social_handle: String,
    pub social_site: SocialSite,
    pub description: String,
    pub image: Option<String>,
}

impl TestimonialDraft {
    /// Returns `true` if the description, image, client name and social
    /// handle are all present and non-empty.
    pub fn is_complete(&self) -> bool {
        !self.description.is_empty()
            && self.image.as_deref().is_some_and(|image| !image.is_empty())
            && !self.client_name.is_empty()
            && !self.social_handle.is_empty()
    }

    pub fn into_testimonial(self, timestamp: DateTime<Utc>) -> Testimonial {
        Testimonial {
            client_name: self.client_name,
            social_handle: self.social_handle,
            social_site: self.social_site,
            description: self.description,
            image: self.image,
            timestamp,
        }
    }
}
