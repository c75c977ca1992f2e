//! Intents for the share dialog.

use crate::share::{ShareChoice, ShareRequest};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ShareDialogIntent {
    /// Show the dialog with the targets that can take `request`.
    Open {
        request: ShareRequest,
        choices: Vec<ShareChoice>,
    },

    /// Move the highlight up.
    SelectPrevious,

    /// Move the highlight down.
    SelectNext,

    /// Hand the request to the highlighted target.
    Confirm,

    /// Spinner tick while sending.
    AnimationTick,

    /// Esc: close without sharing.
    Cancel,

    /// The target finished, successfully or not.
    Finished,
}

impl Intent for ShareDialogIntent {}
