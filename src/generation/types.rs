//! Core types passed to and returned from the generation client.

use std::fmt;

use base64::Engine;

/// MIME type of every image this application produces.
pub const PNG_MIME: &str = "image/png";

/// A prompt that is non-empty after trimming.
///
/// Only constructible through [`NonEmptyPrompt::parse`], so holders never
/// re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyPrompt(String);

impl NonEmptyPrompt {
    /// Trims `raw` and returns `None` if nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A base64-encoded PNG held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64Image(String);

impl Base64Image {
    pub fn new(payload: impl Into<String>) -> Self {
        Self(payload.into())
    }

    /// The raw base64 payload.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The render source for this image (`data:image/png;base64,...`).
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", PNG_MIME, self.0)
    }

    /// Decodes the payload into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD.decode(&self.0)
    }
}
