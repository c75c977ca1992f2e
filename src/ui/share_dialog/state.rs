//! State for the share dialog.

use crate::share::{ShareChoice, ShareRequest};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShareDialogState {
    /// Dialog is not visible.
    #[default]
    Hidden,

    /// Waiting for the user to pick a target.
    Choosing {
        request: ShareRequest,
        /// Never empty: the dialog is only opened with at least one choice.
        choices: Vec<ShareChoice>,
        selected: usize,
    },

    /// The chosen target is working.
    Sending { label: String, animation_tick: u8 },
}

impl UiState for ShareDialogState {}

impl ShareDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// The highlighted choice and the request it would receive.
    pub fn selection(&self) -> Option<(&ShareChoice, &ShareRequest)> {
        match self {
            Self::Choosing {
                request,
                choices,
                selected,
            } => choices.get(*selected).map(|choice| (choice, request)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default_and_invisible() {
        assert_eq!(ShareDialogState::default(), ShareDialogState::Hidden);
        assert!(!ShareDialogState::Hidden.is_visible());
        assert!(ShareDialogState::Hidden.selection().is_none());
    }

    #[test]
    fn sending_has_no_selection() {
        let state = ShareDialogState::Sending {
            label: "Copy to clipboard".into(),
            animation_tick: 0,
        };
        assert!(state.is_visible());
        assert!(state.selection().is_none());
    }
}
