//! Coloring page creator.
//!
//! A terminal front end that turns a short description into a black-and-white
//! coloring page through an image generation service, previews it, and hands
//! the result to the platform's share targets.

pub mod args;
pub mod config;
pub mod generation;
pub mod logging;
pub mod packaging;
pub mod share;
pub mod ui;
