//! Reducer for the share dialog.

use crate::ui::mvi::Reducer;

use super::intent::ShareDialogIntent;
use super::state::ShareDialogState;

pub struct ShareDialogReducer;

impl Reducer for ShareDialogReducer {
    type State = ShareDialogState;
    type Intent = ShareDialogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShareDialogIntent::Open { request, choices } => {
                if choices.is_empty() {
                    return ShareDialogState::Hidden;
                }
                ShareDialogState::Choosing {
                    request,
                    choices,
                    selected: 0,
                }
            }

            ShareDialogIntent::SelectPrevious => match state {
                ShareDialogState::Choosing {
                    request,
                    choices,
                    selected,
                } => {
                    let selected = if selected == 0 {
                        choices.len().saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    ShareDialogState::Choosing {
                        request,
                        choices,
                        selected,
                    }
                }
                other => other,
            },

            ShareDialogIntent::SelectNext => match state {
                ShareDialogState::Choosing {
                    request,
                    choices,
                    selected,
                } => {
                    let selected = if selected + 1 >= choices.len() {
                        0
                    } else {
                        selected + 1
                    };
                    ShareDialogState::Choosing {
                        request,
                        choices,
                        selected,
                    }
                }
                other => other,
            },

            ShareDialogIntent::Confirm => {
                let label = state.selection().map(|(choice, _)| choice.label.clone());
                match label {
                    Some(label) => ShareDialogState::Sending {
                        label,
                        animation_tick: 0,
                    },
                    None => state,
                }
            }

            ShareDialogIntent::AnimationTick => match state {
                ShareDialogState::Sending {
                    label,
                    animation_tick,
                } => ShareDialogState::Sending {
                    label,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },

            // A running target cannot be interrupted.
            ShareDialogIntent::Cancel => match state {
                ShareDialogState::Sending { .. } => state,
                _ => ShareDialogState::Hidden,
            },

            ShareDialogIntent::Finished => ShareDialogState::Hidden,
        }
    }
}
