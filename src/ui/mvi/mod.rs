//! Model-View-Intent primitives shared by the UI feature modules.
//!
//! ```text
//! key / worker event ──→ Intent ──→ Reducer ──→ State ──→ render
//!          ↑                                                │
//!          └────────────────────────────────────────────────┘
//! ```
//!
//! Reducers are the only place a feature's state changes. Side effects
//! (sending commands to the worker) stay in [`crate::ui::app::App`].

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
