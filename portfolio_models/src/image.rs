use std::str::FromStr;

use base64::{prelude::BASE64_STANDARD, Engine};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An image embedded as a `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageDataUrl(String);

impl ImageDataUrl {
    pub fn encode(mime: &str, data: &[u8]) -> Self {
        Self(format!("data:{mime};base64,{}", BASE64_STANDARD.encode(data)))
    }

    /// Returns the media type, if the URL is well formed.
    pub fn mime(&self) -> Option<&str> {
        self.split().map(|(mime, _)| mime)
    }

    /// Decodes the embedded payload.
    pub fn decode(&self) -> Option<Vec<u8>> {
        self.split()
            .and_then(|(_, payload)| BASE64_STANDARD.decode(payload).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    fn split(&self) -> Option<(&str, &str)> {
        let (header, payload) = self.0.strip_prefix("data:")?.split_once(',')?;
        let mime = header.strip_suffix(";base64")?;
        Some((mime, payload))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected an image as a base64 data URL.")]
pub struct ParseImageDataUrlError;

/// Accepts only well formed `data:image/...;base64,` URLs with a decodable
/// payload.
impl FromStr for ImageDataUrl {
    type Err = ParseImageDataUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = Self(s.trim().into());
        let is_image = url.mime().is_some_and(|mime| mime.starts_with("image/"));
        if !is_image || url.decode().is_none() {
            return Err(ParseImageDataUrlError);
        }
        Ok(url)
    }
}

impl From<ImageDataUrl> for String {
    fn from(value: ImageDataUrl) -> Self {
        value.0
    }
}
