//! Configuration file parser for ~/.config/feedreader/config.toml.
//!
//! The config file is optional: a missing or empty file yields
//! `Config::default()`. Unknown keys are accepted but logged as warnings.
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::registry::{FeedRegistry, RawFeed};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of entries rendered per feed (0 = unlimited, the
    /// default: the page shows exactly what the feed returned).
    pub max_entries: usize,

    /// Per-request timeout for feed fetches, in seconds.
    pub request_timeout_secs: u64,

    /// Registry index loaded at startup.
    pub start_feed: usize,

    /// Inline feed list. Empty means "use the built-in feeds".
    pub feeds: Vec<RawFeed>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 0,
            request_timeout_secs: 30,
            start_feed: 0,
            feeds: Vec::new(),
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)`
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // File deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            let known_keys = ["max_entries", "request_timeout_secs", "start_feed", "feeds"];
            for key in raw.keys() {
                if !known_keys.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            feeds = config.feeds.len(),
            max_entries = config.max_entries,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Build the feed registry this config describes: the inline
    /// `[[feeds]]` if any, otherwise the built-in feeds.
    pub fn registry(&self) -> FeedRegistry {
        if self.feeds.is_empty() {
            return FeedRegistry::default();
        }
        FeedRegistry::from_raw(&self.feeds)
    }
}

// ============================================================================
// Tests
// ============================================================================
