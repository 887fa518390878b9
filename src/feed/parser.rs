use anyhow::Result;
use feed_rs::parser;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashSet;

use crate::util::strip_control_chars;

/// One item of a loaded feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub published: Option<i64>,
}

/// A parsed feed: channel title plus entries in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedPayload {
    pub title: Option<String>,
    pub entries: Vec<Entry>,
}

/// Parse RSS/Atom bytes into a [`FeedPayload`].
///
/// Entries repeating an id already seen in the same document are dropped.
pub fn parse_feed(bytes: &[u8]) -> Result<FeedPayload> {
    let feed = parser::parse(bytes)?;

    let title = feed
        .title
        .map(|t| strip_control_chars(t.content.trim()).into_owned())
        .filter(|t| !t.is_empty());

    let mut seen = HashSet::new();
    let entries: Vec<Entry> = feed
        .entries
        .into_iter()
        .map(|entry| {
            let link = entry.links.first().map(|l| l.href.clone());
            let published = entry.published.or(entry.updated).map(|dt| dt.timestamp());
            let summary = entry
                .summary
                .map(|s| s.content)
                .or_else(|| entry.content.and_then(|c| c.body));
            let title = entry
                .title
                .map(|t| strip_control_chars(t.content.trim()).into_owned())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "Untitled".to_string());

            let existing_id = if entry.id.is_empty() {
                None
            } else {
                Some(entry.id.as_str())
            };
            let id = generate_id(existing_id, link.as_deref(), &title, published);

            Entry {
                id,
                title,
                link,
                summary,
                published,
            }
        })
        .filter(|entry| {
            let fresh = seen.insert(entry.id.clone());
            if !fresh {
                tracing::debug!(id = %entry.id, "Dropping duplicate feed entry");
            }
            fresh
        })
        .collect();

    Ok(FeedPayload { title, entries })
}

fn generate_id(
    existing: Option<&str>,
    link: Option<&str>,
    title: &str,
    published: Option<i64>,
) -> String {
    if let Some(id) = existing {
        let trimmed = id.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let input = format!(
        "{}|{}|{}",
        link.unwrap_or(""),
        title,
        published.map(|p| p.to_string()).unwrap_or_default()
    );
    let hash = Sha256::digest(input.as_bytes());
    format!("{:x}", hash)
}
