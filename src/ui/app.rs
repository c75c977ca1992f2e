use tokio::sync::mpsc;

use crate::generation::{Base64Image, GenerationError, NonEmptyPrompt, PNG_MIME};
use crate::packaging;
use crate::share::{file_name_for_prompt, ShareError, ShareReceipt, ShareRequest, ShareSheet};
use crate::ui::generation::{GenerationIntent, GenerationReducer, GenerationState};
use crate::ui::mvi::Reducer;
use crate::ui::preview::Preview;
use crate::ui::prompt::PromptEditor;
use crate::ui::share_dialog::{ShareDialogIntent, ShareDialogReducer, ShareDialogState};

/// Work the UI hands to the background worker.
#[derive(Debug)]
pub enum UiCommand {
    Generate { prompt: NonEmptyPrompt },
    Share { index: usize, request: ShareRequest },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    prompt: PromptEditor,
    /// Generation flow (MVI pattern).
    generation: GenerationState,
    /// Share dialog (MVI pattern).
    share_dialog: ShareDialogState,
    share_sheet: ShareSheet,
    command_sender: Option<UiCommandSender>,
    /// Confirmation of the last successful share, shown in the footer.
    status_note: Option<String>,
    /// Decoded copy of the current image, if it can be drawn.
    preview: Option<Preview>,
}

impl App {
    pub fn new(share_sheet: ShareSheet) -> Self {
        Self {
            should_quit: false,
            prompt: PromptEditor::default(),
            generation: GenerationState::default(),
            share_dialog: ShareDialogState::default(),
            share_sheet,
            command_sender: None,
            status_note: None,
            preview: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn prompt(&self) -> &PromptEditor {
        &self.prompt
    }

    pub fn set_prompt(&mut self, text: &str) {
        self.prompt = PromptEditor::with_text(text);
    }

    /// Apply an edit to the prompt. The editor is read-only while loading.
    pub fn edit_prompt(&mut self, edit: impl FnOnce(&mut PromptEditor)) {
        if self.generation.is_loading() {
            return;
        }
        edit(&mut self.prompt);
    }

    pub fn on_paste(&mut self, text: &str) {
        self.edit_prompt(|prompt| prompt.insert_str(text));
    }

    pub fn generation(&self) -> &GenerationState {
        &self.generation
    }

    pub fn share_dialog(&self) -> &ShareDialogState {
        &self.share_dialog
    }

    pub fn status_note(&self) -> Option<&str> {
        self.status_note.as_deref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Render source of the current image.
    pub fn image_source(&self) -> Option<String> {
        self.generation.image().map(Base64Image::data_url)
    }

    /// Whether the generate trigger is enabled.
    pub fn can_submit(&self) -> bool {
        !self.generation.is_loading() && !self.prompt.is_empty()
    }

    /// Whether the share trigger is shown.
    pub fn can_share(&self) -> bool {
        self.generation.image().is_some() && !self.share_dialog.is_visible()
    }

    pub fn on_tick(&mut self) {
        self.dispatch_generation(GenerationIntent::AnimationTick);
        self.dispatch_share_dialog(ShareDialogIntent::AnimationTick);
    }

    // ========================================================================
    // Generation flow
    // ========================================================================

    /// Validate the prompt and start a generation request.
    ///
    /// A blank prompt fails without contacting the worker and leaves any
    /// current image on screen. Ignored while a request is already in flight.
    pub fn submit(&mut self) {
        if self.generation.is_loading() {
            return;
        }
        self.dispatch_generation(GenerationIntent::Submit {
            prompt: self.prompt.text().to_string(),
        });

        let Some(prompt) = self.generation.loading_prompt().cloned() else {
            tracing::info!("submission rejected: empty prompt");
            return;
        };
        self.status_note = None;
        self.preview = None;
        tracing::info!(prompt = %prompt, "submission accepted");
        if let Err(message) = self.send_command(UiCommand::Generate { prompt }) {
            self.dispatch_generation(GenerationIntent::Rejected {
                message: Some(message),
            });
        }
    }

    /// Store the outcome of a generation request.
    pub fn on_generation_finished(&mut self, result: Result<Base64Image, GenerationError>) {
        if !self.generation.is_loading() {
            tracing::debug!("dropping generation result: no request in flight");
            return;
        }
        match result {
            Ok(image) => {
                self.preview = Preview::from_data_url(&image.data_url());
                self.dispatch_generation(GenerationIntent::Resolved { image });
            }
            Err(err) => {
                self.dispatch_generation(GenerationIntent::Rejected {
                    message: err.description(),
                });
            }
        }
    }

    // ========================================================================
    // Share flow
    // ========================================================================

    /// Package the current image and offer the share dialog.
    ///
    /// Does nothing unless an image is on screen.
    pub fn share(&mut self) {
        if !self.can_share() {
            return;
        }
        let Some(image) = self.generation.image() else {
            return;
        };

        let prompt = self.prompt.text().to_string();
        let file_name = file_name_for_prompt(&prompt);
        let file = match packaging::to_file(image.as_str(), &file_name, PNG_MIME) {
            Ok(file) => file,
            Err(err) => {
                tracing::error!(error = %err, "failed to package image for sharing");
                self.dispatch_generation(GenerationIntent::ShareFailed);
                return;
            }
        };

        let request = ShareRequest::for_prompt(&prompt, file);
        let choices = self.share_sheet.choices(&request.files);
        if choices.is_empty() {
            tracing::warn!(targets = self.share_sheet.len(), "no share target can take the image");
            self.dispatch_generation(GenerationIntent::ShareUnsupported);
            return;
        }
        self.dispatch_share_dialog(ShareDialogIntent::Open { request, choices });
    }

    pub fn move_share_selection(&mut self, up: bool) {
        let intent = if up {
            ShareDialogIntent::SelectPrevious
        } else {
            ShareDialogIntent::SelectNext
        };
        self.dispatch_share_dialog(intent);
    }

    /// Hand the request to the highlighted target.
    pub fn confirm_share(&mut self) {
        let Some((index, request)) = self
            .share_dialog
            .selection()
            .map(|(choice, request)| (choice.index, request.clone()))
        else {
            return;
        };
        self.dispatch_share_dialog(ShareDialogIntent::Confirm);
        if let Err(message) = self.send_command(UiCommand::Share { index, request }) {
            self.on_share_finished(Err(ShareError::Failed(message)));
        }
    }

    /// Close the dialog without sharing. Not an error.
    pub fn cancel_share(&mut self) {
        if matches!(self.share_dialog, ShareDialogState::Choosing { .. }) {
            tracing::info!("share cancelled");
        }
        self.dispatch_share_dialog(ShareDialogIntent::Cancel);
    }

    pub fn on_share_finished(&mut self, result: Result<ShareReceipt, ShareError>) {
        self.dispatch_share_dialog(ShareDialogIntent::Finished);
        match result {
            Ok(receipt) => {
                tracing::info!(summary = %receipt.summary, "share completed");
                self.status_note = Some(receipt.summary);
            }
            Err(ShareError::Cancelled) => {
                tracing::info!("share cancelled");
            }
            Err(ShareError::Unsupported) => {
                self.dispatch_generation(GenerationIntent::ShareUnsupported);
            }
            Err(ShareError::Failed(detail)) => {
                tracing::error!(detail = %detail, "error sharing");
                self.dispatch_generation(GenerationIntent::ShareFailed);
            }
        }
    }

    // ========================================================================
    // MVI dispatch
    // ========================================================================

    fn dispatch_generation(&mut self, intent: GenerationIntent) {
        dispatch_mvi!(self, generation, GenerationReducer, intent);
    }

    fn dispatch_share_dialog(&mut self, intent: ShareDialogIntent) {
        dispatch_mvi!(self, share_dialog, ShareDialogReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Err("The background worker is not running.".to_string());
        };
        sender.try_send(command).map_err(|err| {
            tracing::error!(error = %err, "failed to queue ui command");
            format!("Could not start the request: {}", err)
        })
    }
}
