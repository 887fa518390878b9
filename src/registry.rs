//! The feed registry: the ordered list of feeds the reader can show.
//!
//! A registry is built once at startup (from the config file or the built-in
//! defaults) and handed to the loader by reference. It is read-only in normal
//! operation; `push`/`pop` exist so tests can inject a temporary broken feed
//! and remove it again without touching the others.
use serde::Deserialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Index outside `[0, len)`. This is a caller bug, never a display state.
    #[error("Feed index {index} out of range (registry has {len} feeds)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No feeds configured")]
    Empty,

    #[error("Feed has no name (url: {0})")]
    MissingName(String),

    #[error("Feed '{0}' has no URL")]
    MissingUrl(String),

    #[error("Feed '{name}' has a malformed URL '{url}': {reason}")]
    MalformedUrl {
        name: String,
        url: String,
        reason: String,
    },
}

// ============================================================================
// Feed Descriptor
// ============================================================================

/// A named feed source. Both fields are non-empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDescriptor {
    pub name: String,
    pub url: String,
}

/// Raw `[[feeds]]` record as it appears in the config file, before validation.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RawFeed {
    pub name: String,
    pub url: String,
}

impl FeedDescriptor {
    /// Validate and build a descriptor.
    ///
    /// The URL must parse as an absolute URL, but its scheme is not checked:
    /// `htttp://thisistest.com/` is accepted here and fails later at fetch time.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Result<Self, RegistryError> {
        let name = name.into().trim().to_string();
        let url = url.into().trim().to_string();

        if name.is_empty() {
            return Err(RegistryError::MissingName(url));
        }
        if url.is_empty() {
            return Err(RegistryError::MissingUrl(name));
        }
        if let Err(e) = Url::parse(&url) {
            return Err(RegistryError::MalformedUrl {
                name,
                url,
                reason: e.to_string(),
            });
        }

        Ok(Self { name, url })
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Built-in feeds used when the config file lists none.
const DEFAULT_FEEDS: &[(&str, &str)] = &[
    ("Udacity Blog", "http://blog.udacity.com/feed"),
    ("CSS Tricks", "http://feeds.feedburner.com/CssTricks"),
    ("HTML5 Rocks", "http://feeds.feedburner.com/html5rocks"),
    (
        "Linear Digressions",
        "http://feeds.feedburner.com/udacity-linear-digressions",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRegistry {
    feeds: Vec<FeedDescriptor>,
}

impl Default for FeedRegistry {
    fn default() -> Self {
        Self {
            feeds: DEFAULT_FEEDS
                .iter()
                .map(|(name, url)| FeedDescriptor {
                    name: (*name).to_string(),
                    url: (*url).to_string(),
                })
                .collect(),
        }
    }
}

impl FeedRegistry {
    /// Build a registry from already-validated descriptors.
    pub fn new(feeds: Vec<FeedDescriptor>) -> Self {
        Self { feeds }
    }

    /// Build a registry from raw config records.
    ///
    /// An invalid record disables that one feed: it is skipped with a warning
    /// and the remaining feeds keep their relative order.
    pub fn from_raw<'a>(raw: impl IntoIterator<Item = &'a RawFeed>) -> Self {
        let feeds = raw
            .into_iter()
            .filter_map(|r| match FeedDescriptor::new(r.name.as_str(), r.url.as_str()) {
                Ok(feed) => Some(feed),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping invalid feed in config");
                    None
                }
            })
            .collect();
        Self { feeds }
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    /// Descriptor at `index`, or `IndexOutOfRange`.
    pub fn at(&self, index: usize) -> Result<&FeedDescriptor, RegistryError> {
        self.feeds.get(index).ok_or(RegistryError::IndexOutOfRange {
            index,
            len: self.feeds.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeedDescriptor> {
        self.feeds.iter()
    }

    /// Append a descriptor. Intended for test injection.
    pub fn push(&mut self, feed: FeedDescriptor) {
        tracing::debug!(name = %feed.name, url = %feed.url, "Appending feed to registry");
        self.feeds.push(feed);
    }

    /// Remove the last descriptor. Intended for test injection.
    pub fn pop(&mut self) -> Option<FeedDescriptor> {
        self.feeds.pop()
    }

    /// Re-check every descriptor; an empty registry is an error.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.feeds.is_empty() {
            return Err(RegistryError::Empty);
        }
        for feed in &self.feeds {
            FeedDescriptor::new(feed.name.as_str(), feed.url.as_str())?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FeedRegistry {
    type Item = &'a FeedDescriptor;
    type IntoIter = std::slice::Iter<'a, FeedDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.feeds.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_registry_is_defined_and_not_empty() {
        let registry = FeedRegistry::default();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 4);
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_every_default_feed_has_url() {
        for feed in &FeedRegistry::default() {
            assert!(!feed.url.is_empty());
        }
    }

    #[test]
    fn test_every_default_feed_has_name() {
        for feed in &FeedRegistry::default() {
            assert!(!feed.name.is_empty());
        }
    }

    #[test]
    fn test_at_out_of_range() {
        let registry = FeedRegistry::default();
        let err = registry.at(registry.len()).unwrap_err();
        assert_eq!(err, RegistryError::IndexOutOfRange { index: 4, len: 4 });
    }

    #[test]
    fn test_descriptor_rejects_blank_fields() {
        assert!(matches!(
            FeedDescriptor::new("  ", "https://example.com/feed"),
            Err(RegistryError::MissingName(_))
        ));
        assert!(matches!(
            FeedDescriptor::new("Example", ""),
            Err(RegistryError::MissingUrl(_))
        ));
        assert!(matches!(
            FeedDescriptor::new("Example", "not a url"),
            Err(RegistryError::MalformedUrl { .. })
        ));
    }

    #[test]
    fn test_descriptor_accepts_unknown_scheme() {
        // Scheme problems surface at fetch time, not here
        let feed = FeedDescriptor::new("Test", "htttp://thisistest.com/").unwrap();
        assert_eq!(feed.url, "htttp://thisistest.com/");
    }

    #[test]
    fn test_from_raw_skips_invalid_and_keeps_order() {
        let raw = vec![
            RawFeed {
                name: "A".into(),
                url: "https://a.example.com/feed".into(),
            },
            RawFeed {
                name: String::new(),
                url: "https://b.example.com/feed".into(),
            },
            RawFeed {
                name: "C".into(),
                url: "https://c.example.com/feed".into(),
            },
        ];
        let registry = FeedRegistry::from_raw(&raw);
        let names: Vec<&str> = registry.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_empty_registry_fails_validation() {
        let registry = FeedRegistry::new(Vec::new());
        assert_eq!(registry.validate(), Err(RegistryError::Empty));
    }

    #[test]
    fn test_push_pop_restores_length() {
        let mut registry = FeedRegistry::default();
        let before = registry.clone();

        registry.push(FeedDescriptor::new("Test", "htttp://thisistest.com/").unwrap());
        assert_eq!(registry.len(), before.len() + 1);
        assert_eq!(registry.at(before.len()).unwrap().name, "Test");

        registry.pop();
        assert_eq!(registry, before);
    }

    proptest! {
        #[test]
        fn prop_at_matches_bounds(index in 0usize..16) {
            let registry = FeedRegistry::default();
            prop_assert_eq!(registry.at(index).is_ok(), index < registry.len());
        }
    }
}
