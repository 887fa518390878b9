//! Feed loading state machine.
//!
//! A load runs in two halves. [`FeedLoader::load`] resolves the registry
//! entry, bumps the generation counter and spawns the fetch on a tokio task.
//! The task never touches page state; it sends a [`LoadEvent`] back over a
//! channel, and whoever owns the page (the UI loop, a test, the `--print`
//! driver) hands that event to [`FeedLoader::apply`].
//!
//! `apply` only renders results whose generation matches the newest request,
//! so a slow response for an older selection can never overwrite a newer
//! one. Every event still fires its completion callback, in arrival order.
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::feed::{Entry, FeedPayload, FetchError, Transport};
use crate::presenter::Presenter;
use crate::registry::{FeedRegistry, RegistryError};
use crate::util::catch_task_panic;

/// Continuation invoked once a load settles, whatever the outcome.
pub type Completion = Box<dyn FnOnce(&LoadOutcome) + Send + 'static>;

/// What the entry area currently shows, from the loader's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    /// Nothing requested yet.
    Idle,
    /// A request for `index` is in flight; the previous content is still shown.
    Loading { index: usize },
    Loaded {
        index: usize,
        header_title: String,
        entries: Arc<Vec<Entry>>,
    },
    Error { index: usize, message: String },
}

/// How a single load ended, as seen by its completion callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { index: usize, entries: usize },
    Failed { index: usize, message: String },
    /// A newer load was started before this one settled; nothing was rendered.
    Superseded { index: usize },
}

/// Result of a fetch task, sent back to the page owner.
pub struct LoadEvent {
    pub generation: u64,
    pub index: usize,
    pub feed_name: String,
    pub result: Result<FeedPayload, FetchError>,
    on_complete: Option<Completion>,
}

impl std::fmt::Debug for LoadEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadEvent")
            .field("generation", &self.generation)
            .field("index", &self.index)
            .field("feed_name", &self.feed_name)
            .field("result", &self.result.as_ref().map(|p| p.entries.len()))
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

pub struct FeedLoader {
    transport: Arc<dyn Transport>,
    event_tx: mpsc::Sender<LoadEvent>,
    generation: u64,
    state: DisplayState,
    /// Cap on rendered entries per feed (0 = unlimited).
    max_entries: usize,
}

impl FeedLoader {
    pub fn new(
        transport: Arc<dyn Transport>,
        event_tx: mpsc::Sender<LoadEvent>,
        max_entries: usize,
    ) -> Self {
        Self {
            transport,
            event_tx,
            generation: 0,
            state: DisplayState::Idle,
            max_entries,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DisplayState::Loading { .. })
    }

    /// Start loading the feed at `index`.
    ///
    /// Supersedes any load still in flight. Must be called from within a
    /// tokio runtime. Returns the generation assigned to this request.
    ///
    /// # Errors
    ///
    /// [`RegistryError::IndexOutOfRange`] if `index` is not in the registry;
    /// in that case no state changes and `on_complete` is dropped uncalled.
    pub fn load(
        &mut self,
        registry: &FeedRegistry,
        index: usize,
        on_complete: Option<Completion>,
        presenter: &mut dyn Presenter,
    ) -> Result<u64, RegistryError> {
        let feed = registry.at(index)?;

        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;

        if let DisplayState::Loading { index: previous } = self.state {
            tracing::debug!(previous, index, generation, "Superseding in-flight load");
        }
        self.state = DisplayState::Loading { index };
        presenter.set_loading(Some(&feed.name));

        tracing::debug!(index, generation, url = %feed.url, "Starting feed load");

        let fetch = self.transport.fetch(&feed.url);
        let feed_name = feed.name.clone();
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let result = match catch_task_panic(fetch).await {
                Ok(result) => result,
                Err(panic_msg) => {
                    tracing::error!(
                        task = "feed_load",
                        index,
                        error = %panic_msg,
                        "Background task panicked"
                    );
                    Err(FetchError::TaskPanicked(panic_msg))
                }
            };

            let event = LoadEvent {
                generation,
                index,
                feed_name,
                result,
                on_complete,
            };
            if let Err(e) = tx.send(event).await {
                tracing::warn!(
                    error = %e,
                    event = "LoadEvent",
                    "Channel send failed (receiver dropped)"
                );
            }
        });

        Ok(generation)
    }

    /// Apply a settled load to the page and fire its completion callback.
    pub fn apply(&mut self, event: LoadEvent, presenter: &mut dyn Presenter) -> LoadOutcome {
        let LoadEvent {
            generation,
            index,
            feed_name,
            result,
            on_complete,
        } = event;

        let outcome = if generation != self.generation {
            tracing::debug!(
                expected = self.generation,
                got = generation,
                index,
                "Ignoring stale feed load (generation mismatch)"
            );
            LoadOutcome::Superseded { index }
        } else {
            match result {
                Ok(payload) => self.render_payload(index, &feed_name, payload, presenter),
                Err(e) => {
                    let message = format!("Could not load {}: {}", feed_name, e);
                    tracing::warn!(index, feed = %feed_name, error = %e, "Feed load failed");
                    presenter.show_error(&feed_name, &message);
                    self.state = DisplayState::Error {
                        index,
                        message: message.clone(),
                    };
                    LoadOutcome::Failed { index, message }
                }
            }
        };

        if let Some(done) = on_complete {
            done(&outcome);
        }
        outcome
    }

    fn render_payload(
        &mut self,
        index: usize,
        feed_name: &str,
        payload: FeedPayload,
        presenter: &mut dyn Presenter,
    ) -> LoadOutcome {
        let FeedPayload { title, mut entries } = payload;
        if self.max_entries > 0 && entries.len() > self.max_entries {
            entries.truncate(self.max_entries);
        }
        let entries = Arc::new(entries);
        let count = entries.len();

        presenter.render_entries(feed_name, title.as_deref(), Arc::clone(&entries));
        self.state = DisplayState::Loaded {
            index,
            header_title: feed_name.to_string(),
            entries,
        };

        tracing::info!(index, feed = %feed_name, entries = count, "Feed loaded");
        LoadOutcome::Loaded {
            index,
            entries: count,
        }
    }
}
