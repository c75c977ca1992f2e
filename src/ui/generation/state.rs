//! State of the generation flow.

use crate::generation::{Base64Image, NonEmptyPrompt};
use crate::ui::mvi::UiState;

/// Shown when the prompt is empty or whitespace.
pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a description for your coloring page.";

/// Shown when a generation failure carries no description.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Shown when no share target can take the packaged file.
pub const SHARE_UNSUPPORTED_MESSAGE: &str =
    "Web Share API is not supported in this browser, or cannot share files.";

/// Shown for any share failure other than a cancel.
pub const SHARE_FAILED_MESSAGE: &str = "Could not share the image.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// A request is in flight.
    Loading {
        prompt: NonEmptyPrompt,
        /// Spinner frame counter.
        animation_tick: u8,
    },

    /// The service returned an image.
    Succeeded {
        image: Base64Image,
        /// Error shown over the image: a failed share or a blank resubmission.
        notice: Option<String>,
    },

    /// Validation or generation failed.
    Failed { message: String },
}

impl UiState for GenerationState {}

impl GenerationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Prompt of the in-flight request.
    pub fn loading_prompt(&self) -> Option<&NonEmptyPrompt> {
        match self {
            Self::Loading { prompt, .. } => Some(prompt),
            _ => None,
        }
    }

    pub fn animation_tick(&self) -> u8 {
        match self {
            Self::Loading { animation_tick, .. } => *animation_tick,
            _ => 0,
        }
    }

    /// The current image, only while succeeded.
    pub fn image(&self) -> Option<&Base64Image> {
        match self {
            Self::Succeeded { image, .. } => Some(image),
            _ => None,
        }
    }

    /// Text for the error banner, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            Self::Succeeded { notice, .. } => notice.as_deref(),
            _ => None,
        }
    }
}
