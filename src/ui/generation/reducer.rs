//! Reducer for the generation flow.

use crate::generation::NonEmptyPrompt;
use crate::ui::mvi::Reducer;

use super::intent::GenerationIntent;
use super::state::{
    GenerationState, EMPTY_PROMPT_MESSAGE, SHARE_FAILED_MESSAGE, SHARE_UNSUPPORTED_MESSAGE,
    UNEXPECTED_ERROR_MESSAGE,
};

pub struct GenerationReducer;

impl Reducer for GenerationReducer {
    type State = GenerationState;
    type Intent = GenerationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GenerationIntent::Submit { prompt } => {
                // One request in flight at a time.
                if state.is_loading() {
                    return state;
                }
                match NonEmptyPrompt::parse(&prompt) {
                    Some(prompt) => GenerationState::Loading {
                        prompt,
                        animation_tick: 0,
                    },
                    // A blank resubmission keeps the current image.
                    None => match state {
                        GenerationState::Succeeded { .. } => with_notice(state, EMPTY_PROMPT_MESSAGE),
                        _ => GenerationState::Failed {
                            message: EMPTY_PROMPT_MESSAGE.to_string(),
                        },
                    },
                }
            }

            GenerationIntent::AnimationTick => match state {
                GenerationState::Loading {
                    prompt,
                    animation_tick,
                } => GenerationState::Loading {
                    prompt,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },

            GenerationIntent::Resolved { image } => match state {
                GenerationState::Loading { .. } => GenerationState::Succeeded {
                    image,
                    notice: None,
                },
                other => other,
            },

            GenerationIntent::Rejected { message } => match state {
                GenerationState::Loading { .. } => GenerationState::Failed {
                    message: message
                        .filter(|text| !text.trim().is_empty())
                        .unwrap_or_else(|| UNEXPECTED_ERROR_MESSAGE.to_string()),
                },
                other => other,
            },

            GenerationIntent::ShareUnsupported => with_notice(state, SHARE_UNSUPPORTED_MESSAGE),

            GenerationIntent::ShareFailed => with_notice(state, SHARE_FAILED_MESSAGE),
        }
    }
}

fn with_notice(state: GenerationState, message: &str) -> GenerationState {
    match state {
        GenerationState::Succeeded { image, .. } => GenerationState::Succeeded {
            image,
            notice: Some(message.to_string()),
        },
        other => other,
    }
}
