//! Image generation client.
//!
//! One request per call, no retries. The caller validates the prompt.

mod error;
mod gemini;
mod provider;
mod types;

pub use error::GenerationError;
pub use gemini::GeminiClient;
pub use provider::ImageGenerator;
pub use types::{Base64Image, NonEmptyPrompt, PNG_MIME};
