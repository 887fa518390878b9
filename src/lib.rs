//! Terminal feed reader.
//!
//! The [`registry`] lists the feeds, the [`loader`] fetches one at a time
//! (the newest request always wins), and the [`menu`] controls the slide-out
//! feed list. Both write to the page through the [`presenter`] port, which
//! the [`ui`] draws with ratatui.

pub mod app;
pub mod config;
pub mod feed;
pub mod loader;
pub mod menu;
pub mod presenter;
pub mod registry;
pub mod ui;
pub mod util;
