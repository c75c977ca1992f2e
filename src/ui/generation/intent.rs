//! Intents for the generation flow.

use crate::generation::Base64Image;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GenerationIntent {
    /// The user asked to generate from the editor text (untrimmed).
    Submit { prompt: String },

    /// Spinner tick.
    AnimationTick,

    /// The generator returned an image.
    Resolved { image: Base64Image },

    /// The generator failed. `None` when the failure has no description.
    Rejected { message: Option<String> },

    /// No share target can take the image.
    ShareUnsupported,

    /// Packaging or the chosen share target failed.
    ShareFailed,
}

impl Intent for GenerationIntent {}
