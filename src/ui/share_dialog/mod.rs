//! Share dialog: pick a share target for the current page.
//!
//! Uses the same MVI layout as the generation flow:
//! - `state.rs` - dialog state
//! - `intent.rs` - navigation, confirm and cancel
//! - `reducer.rs` - transitions
//! - `dialog.rs` - rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_share_dialog;
pub use intent::ShareDialogIntent;
pub use reducer::ShareDialogReducer;
pub use state::ShareDialogState;
