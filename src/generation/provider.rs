//! Generator trait.

use async_trait::async_trait;

use super::error::GenerationError;
use super::types::{Base64Image, NonEmptyPrompt};

/// Trait for image generation backends.
///
/// Implementations make exactly one attempt per call and never mutate
/// shared state; the result is handed back to the caller.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Returns the name of this generator for logging.
    fn name(&self) -> &str;

    /// Generates an image for `prompt`.
    async fn generate(&self, prompt: &NonEmptyPrompt) -> Result<Base64Image, GenerationError>;
}
