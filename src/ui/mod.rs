//! Terminal User Interface.
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `render` - Page layout: header, body, error region, status bar
//! - `feeds` - Slide-out feed menu
//! - `entries` - Entry list
//! - `status` - Status bar

mod entries;
mod feeds;
mod input;
mod loop_runner;
mod render;
mod status;

pub use loop_runner::{run, Action};
