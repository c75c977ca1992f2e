//! Generation state machine: idle, loading, succeeded, failed.
//!
//! - `state.rs` - the state enum and the user-facing messages
//! - `intent.rs` - submissions, worker results and share outcomes
//! - `reducer.rs` - transitions

mod intent;
mod reducer;
mod state;

pub use intent::GenerationIntent;
pub use reducer::GenerationReducer;
pub use state::{
    GenerationState, EMPTY_PROMPT_MESSAGE, SHARE_FAILED_MESSAGE, SHARE_UNSUPPORTED_MESSAGE,
    UNEXPECTED_ERROR_MESSAGE,
};
