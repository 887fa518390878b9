//! Small shared helpers.
//!
//! - **URL validation**: scheme check before opening links in a browser
//! - **Text**: control-sequence stripping and width-aware truncation
//! - **Tasks**: panic capture for spawned background work

mod task;
mod text;
mod url_validator;

pub use task::catch_task_panic;
pub use text::{strip_control_chars, truncate_to_width};
pub use url_validator::validate_url_for_open;
