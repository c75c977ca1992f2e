//! Terminal UI: controller, reducers, rendering and the background worker.

pub mod app;
pub mod events;
pub mod footer;
pub mod generation;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod preview;
pub mod prompt;
pub mod render;
pub mod runtime;
pub mod share_dialog;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

pub use runtime::run;
