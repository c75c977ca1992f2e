//! System clipboard share target.
//!
//! The platform clipboard handle lives on a dedicated thread: on X11 the
//! contents disappear once the owning handle is dropped, and the handle is
//! not shareable across threads on every platform. The thread opens the
//! clipboard as soon as the target is built, so checking availability never
//! waits on it.

use std::borrow::Cow;
use std::sync::mpsc::{channel, sync_channel, Receiver, Sender, SyncSender};
use std::sync::Arc;

use arboard::{Clipboard, ImageData};
use parking_lot::Mutex;

use super::{ShareError, ShareReceipt, ShareRequest, ShareSupport, ShareTarget};
use crate::packaging::SharedFile;

struct ClipboardJob {
    image: ImageData<'static>,
    reply: SyncSender<Result<(), ShareError>>,
}

/// Outcome of opening the clipboard; `None` while the thread is still opening it.
type Availability = Arc<Mutex<Option<bool>>>;

/// Places the shared image on the system clipboard.
pub struct ClipboardTarget {
    jobs: Mutex<Option<Sender<ClipboardJob>>>,
    available: Availability,
}

impl ClipboardTarget {
    /// Start the clipboard thread and open the clipboard in the background.
    pub fn new() -> Self {
        let available: Availability = Arc::new(Mutex::new(None));
        let (sender, receiver) = channel();
        let thread_available = Arc::clone(&available);
        let spawned = std::thread::Builder::new()
            .name("clipboard".to_string())
            .spawn(move || clipboard_loop(receiver, thread_available));

        let jobs = match spawned {
            Ok(_) => Some(sender),
            Err(err) => {
                tracing::warn!(error = %err, "failed to start clipboard thread");
                *available.lock() = Some(false);
                None
            }
        };
        Self {
            jobs: Mutex::new(jobs),
            available,
        }
    }
}

impl Default for ClipboardTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl ShareTarget for ClipboardTarget {
    fn label(&self) -> &str {
        "Copy to clipboard"
    }

    /// Reads the cached availability. While the clipboard is still being opened the
    /// target is offered; delivery reports `Unsupported` if opening fails.
    fn support(&self) -> ShareSupport {
        match *self.available.lock() {
            Some(false) => ShareSupport::Unavailable,
            _ => ShareSupport::Files,
        }
    }

    fn can_share(&self, files: &[SharedFile]) -> bool {
        files.len() == 1
            && files[0].mime_type.starts_with("image/")
            && self.support() == ShareSupport::Files
    }

    fn share(&self, request: &ShareRequest) -> Result<ShareReceipt, ShareError> {
        let file = request.files.first().ok_or(ShareError::Unsupported)?;
        let decoded = image::load_from_memory(&file.bytes)
            .map_err(|e| ShareError::Failed(format!("cannot decode {}: {}", file.name, e)))?
            .to_rgba8();
        let (width, height) = decoded.dimensions();
        let image = ImageData {
            width: width as usize,
            height: height as usize,
            bytes: Cow::Owned(decoded.into_raw()),
        };

        let (reply, answer) = sync_channel(1);
        let sent = match self.jobs.lock().as_ref() {
            Some(jobs) => jobs.send(ClipboardJob { image, reply }).is_ok(),
            None => false,
        };
        if !sent {
            return Err(ShareError::Unsupported);
        }
        answer
            .recv()
            .map_err(|_| ShareError::Failed("clipboard thread stopped".to_string()))??;

        tracing::info!(file = %file.name, width, height, "copied page to clipboard");
        Ok(ShareReceipt {
            summary: format!("Copied {} to the clipboard", file.name),
        })
    }
}

fn clipboard_loop(jobs: Receiver<ClipboardJob>, available: Availability) {
    let mut clipboard = match Clipboard::new() {
        Ok(handle) => Some(handle),
        Err(err) => {
            tracing::debug!(error = %err, "clipboard unavailable");
            None
        }
    };
    *available.lock() = Some(clipboard.is_some());

    for ClipboardJob { image, reply } in jobs {
        let result = match clipboard.as_mut() {
            Some(handle) => handle
                .set_image(image)
                .map_err(|e| ShareError::Failed(format!("Failed to set clipboard image: {}", e))),
            None => Err(ShareError::Unsupported),
        };
        let _ = reply.send(result);
    }
}
