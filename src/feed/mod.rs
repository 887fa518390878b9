//! Feed fetching and parsing.
//!
//! - [`parser`] - RSS/Atom parsing into [`FeedPayload`] via `feed-rs`
//! - [`transport`] - the [`Transport`] seam and its reqwest implementation

mod parser;
mod transport;

pub use parser::{parse_feed, Entry, FeedPayload};
pub use transport::{FetchError, HttpTransport, Transport};
