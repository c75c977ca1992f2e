//! Share sheet: the platform targets a generated page can be handed to.
//!
//! Every target reports what it can accept ([`ShareSupport`]) and is probed
//! with the concrete files before it is offered.

mod clipboard;
mod directory;

use std::sync::Arc;

use thiserror::Error;

use crate::config::{ShareConfig, ShareTargetKind};
use crate::packaging::SharedFile;

pub use clipboard::ClipboardTarget;
pub use directory::DirectoryTarget;

/// Title attached to every share request.
pub const SHARE_TITLE: &str = "My Coloring Page";

/// Number of prompt characters used for the shared file name.
const FILE_NAME_PROMPT_CHARS: usize = 20;

/// File name for a page generated from `prompt`.
///
/// Takes the first 20 characters, collapses each run of whitespace or path
/// separators to a single underscore, replaces `..` with `_`, and appends
/// `_coloring_page.png`. The result is always a plain file name.
pub fn file_name_for_prompt(prompt: &str) -> String {
    let mut stem = String::new();
    let mut in_separator = false;
    for ch in prompt.chars().take(FILE_NAME_PROMPT_CHARS) {
        if ch.is_whitespace() || matches!(ch, '/' | '\\' | '\0') {
            if !in_separator {
                stem.push('_');
            }
            in_separator = true;
        } else {
            stem.push(ch);
            in_separator = false;
        }
    }
    let stem = stem.replace("..", "_");
    format!("{stem}_coloring_page.png")
}

/// What a target is able to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareSupport {
    /// Accepts files.
    Files,
    /// Reachable, but only for text.
    TextOnly,
    /// Not reachable on this platform/session.
    Unavailable,
}

/// Payload handed to a share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub files: Vec<SharedFile>,
}

impl ShareRequest {
    /// Request for a page generated from `prompt`.
    pub fn for_prompt(prompt: &str, file: SharedFile) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: format!("Check out this coloring page I made: {prompt}"),
            files: vec![file],
        }
    }
}

/// Confirmation returned by a target after a successful share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareReceipt {
    pub summary: String,
}

/// Errors that can occur while sharing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// No target can take the given files.
    #[error("sharing is not supported for these files")]
    Unsupported,

    /// The user dismissed the share dialog.
    #[error("share cancelled")]
    Cancelled,

    /// The target accepted the request but failed.
    #[error("share failed: {0}")]
    Failed(String),
}

/// A platform share destination.
pub trait ShareTarget: Send + Sync {
    /// Name shown in the share dialog.
    fn label(&self) -> &str;

    /// Probe what this target can accept right now.
    fn support(&self) -> ShareSupport;

    /// Whether this target can take `files`.
    fn can_share(&self, files: &[SharedFile]) -> bool {
        match self.support() {
            ShareSupport::Files => !files.is_empty(),
            ShareSupport::TextOnly => files.is_empty(),
            ShareSupport::Unavailable => false,
        }
    }

    /// Deliver the request. Blocking; callers run it off the UI thread.
    fn share(&self, request: &ShareRequest) -> Result<ShareReceipt, ShareError>;
}

/// An entry of the share dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareChoice {
    /// Index into the sheet's targets.
    pub index: usize,
    pub label: String,
}

/// The ordered set of share targets.
#[derive(Clone, Default)]
pub struct ShareSheet {
    targets: Vec<Arc<dyn ShareTarget>>,
}

impl ShareSheet {
    pub fn new(targets: Vec<Arc<dyn ShareTarget>>) -> Self {
        Self { targets }
    }

    /// Build the targets listed in the config, in order.
    pub fn from_config(config: &ShareConfig) -> Self {
        let targets = config
            .targets
            .iter()
            .map(|kind| -> Arc<dyn ShareTarget> {
                match kind {
                    ShareTargetKind::Clipboard => Arc::new(ClipboardTarget::new()),
                    ShareTargetKind::Save => {
                        Arc::new(DirectoryTarget::new(config.resolved_export_dir()))
                    }
                }
            })
            .collect();
        Self::new(targets)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Probe every target; true if at least one can take `files`.
    pub fn can_share(&self, files: &[SharedFile]) -> bool {
        self.targets.iter().any(|target| target.can_share(files))
    }

    /// Targets that can take `files`, for the share dialog.
    pub fn choices(&self, files: &[SharedFile]) -> Vec<ShareChoice> {
        self.targets
            .iter()
            .enumerate()
            .filter(|(_, target)| target.can_share(files))
            .map(|(index, target)| ShareChoice {
                index,
                label: target.label().to_string(),
            })
            .collect()
    }

    /// Hand `request` to the target at `index`.
    pub fn deliver(&self, index: usize, request: &ShareRequest) -> Result<ShareReceipt, ShareError> {
        let Some(target) = self.targets.get(index) else {
            return Err(ShareError::Unsupported);
        };
        if !target.can_share(&request.files) {
            return Err(ShareError::Unsupported);
        }
        target.share(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct FakeTarget {
        label: &'static str,
        support: ShareSupport,
        shared: Mutex<Vec<ShareRequest>>,
    }

    impl FakeTarget {
        fn new(label: &'static str, support: ShareSupport) -> Arc<Self> {
            Arc::new(Self {
                label,
                support,
                shared: Mutex::new(Vec::new()),
            })
        }
    }

    impl ShareTarget for FakeTarget {
        fn label(&self) -> &str {
            self.label
        }

        fn support(&self) -> ShareSupport {
            self.support
        }

        fn share(&self, request: &ShareRequest) -> Result<ShareReceipt, ShareError> {
            self.shared.lock().push(request.clone());
            Ok(ShareReceipt {
                summary: format!("shared via {}", self.label),
            })
        }
    }

    fn sheet_of(targets: &[Arc<FakeTarget>]) -> ShareSheet {
        ShareSheet::new(
            targets
                .iter()
                .map(|target| Arc::clone(target) as Arc<dyn ShareTarget>)
                .collect(),
        )
    }

    fn png_file() -> SharedFile {
        SharedFile {
            name: "fox_coloring_page.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn file_name_takes_twenty_chars_and_collapses_whitespace() {
        assert_eq!(
            file_name_for_prompt("a castle in the clouds and more"),
            "a_castle_in_the_clou_coloring_page.png"
        );
        assert_eq!(
            file_name_for_prompt("a   red \t fox"),
            "a_red_fox_coloring_page.png"
        );
        assert_eq!(file_name_for_prompt(" fox"), "_fox_coloring_page.png");
    }

    #[test]
    fn file_name_never_contains_path_components() {
        assert_eq!(
            file_name_for_prompt("../escaped"),
            "__escaped_coloring_page.png"
        );
        assert_eq!(
            file_name_for_prompt("cats/dogs at play"),
            "cats_dogs_at_play_coloring_page.png"
        );
        assert_eq!(
            file_name_for_prompt("a \\ b\0c"),
            "a_b_c_coloring_page.png"
        );
        for prompt in ["..", "../../etc/passwd", "a/../b", "..\\x"] {
            let name = file_name_for_prompt(prompt);
            assert!(!name.contains(['/', '\\', '\0']), "{name}");
            assert!(!name.contains(".."), "{name}");
        }
    }

    #[test]
    fn file_name_counts_characters_not_bytes() {
        assert_eq!(
            file_name_for_prompt("ééééééééééééééééééééééé"),
            format!("{}_coloring_page.png", "é".repeat(20))
        );
    }

    #[test]
    fn request_embeds_prompt() {
        let request = ShareRequest::for_prompt("a red fox", png_file());
        assert_eq!(request.title, "My Coloring Page");
        assert_eq!(request.text, "Check out this coloring page I made: a red fox");
        assert_eq!(request.files.len(), 1);
    }

    #[test]
    fn empty_sheet_cannot_share() {
        let sheet = ShareSheet::default();
        assert!(sheet.is_empty());
        assert!(!sheet.can_share(&[png_file()]));
    }

    #[test]
    fn text_only_targets_cannot_take_files() {
        let sheet = sheet_of(&[
            FakeTarget::new("messages", ShareSupport::TextOnly),
            FakeTarget::new("printer", ShareSupport::Unavailable),
        ]);
        assert!(!sheet.can_share(&[png_file()]));
        assert!(sheet.choices(&[png_file()]).is_empty());
    }

    #[test]
    fn choices_keep_sheet_indices() {
        let sheet = sheet_of(&[
            FakeTarget::new("offline", ShareSupport::Unavailable),
            FakeTarget::new("clipboard", ShareSupport::Files),
        ]);
        assert_eq!(
            sheet.choices(&[png_file()]),
            vec![ShareChoice {
                index: 1,
                label: "clipboard".to_string()
            }]
        );
    }

    #[test]
    fn deliver_invokes_target() {
        let target = FakeTarget::new("clipboard", ShareSupport::Files);
        let sheet = sheet_of(&[target.clone()]);
        let request = ShareRequest::for_prompt("a red fox", png_file());

        let receipt = sheet.deliver(0, &request).unwrap();

        assert_eq!(receipt.summary, "shared via clipboard");
        assert_eq!(target.shared.lock().as_slice(), &[request]);
    }

    #[test]
    fn deliver_to_unknown_or_incapable_target_is_unsupported() {
        let target = FakeTarget::new("offline", ShareSupport::Unavailable);
        let sheet = sheet_of(&[target.clone()]);
        let request = ShareRequest::for_prompt("a red fox", png_file());

        assert_eq!(sheet.deliver(0, &request), Err(ShareError::Unsupported));
        assert_eq!(sheet.deliver(5, &request), Err(ShareError::Unsupported));
        assert!(target.shared.lock().is_empty());
    }
}
