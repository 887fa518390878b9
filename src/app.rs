use crate::config::Config;
use crate::feed::{Entry, Transport};
use crate::loader::{Completion, FeedLoader, LoadEvent, LoadOutcome};
use crate::menu::MenuController;
use crate::presenter::PageView;
use crate::registry::{FeedRegistry, RegistryError};
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Application state owned by the UI loop.
///
/// Every page mutation goes through `loader` or `menu`, which write to
/// `page` via the presenter port; the renderer only reads `page`.
pub struct App {
    pub registry: FeedRegistry,
    pub loader: FeedLoader,
    pub menu: MenuController,
    pub page: PageView,
    /// Highlighted row in the slide-out menu.
    pub menu_cursor: usize,
    /// Highlighted row in the entry list.
    pub selected_entry: usize,
    /// Registry index of the most recent load request.
    pub current_feed: Option<usize>,
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    pub needs_redraw: bool,
    pub spinner_frame: usize,
}

impl App {
    pub fn new(
        config: &Config,
        registry: FeedRegistry,
        transport: Arc<dyn Transport>,
        event_tx: mpsc::Sender<LoadEvent>,
    ) -> Self {
        let loader = FeedLoader::new(transport, event_tx, config.max_entries);
        let mut page = PageView::default();
        if let Err(e) = registry.validate() {
            tracing::warn!(error = %e, "Feed registry is unusable");
            page.error = Some(e.to_string());
        }

        Self {
            registry,
            loader,
            menu: MenuController::new(),
            page,
            menu_cursor: 0,
            selected_entry: 0,
            current_feed: None,
            status_message: None,
            needs_redraw: true,
            spinner_frame: 0,
        }
    }

    /// Start loading feed `index`; see [`FeedLoader::load`].
    pub fn load_feed(
        &mut self,
        index: usize,
        on_complete: Option<Completion>,
    ) -> Result<u64, RegistryError> {
        let generation = self
            .loader
            .load(&self.registry, index, on_complete, &mut self.page)?;
        self.current_feed = Some(index);
        self.menu_cursor = index;
        self.needs_redraw = true;
        Ok(generation)
    }

    /// Apply a settled load and keep the entry cursor in range.
    pub fn handle_load_event(&mut self, event: LoadEvent) -> LoadOutcome {
        let outcome = self.loader.apply(event, &mut self.page);
        if let LoadOutcome::Loaded { .. } = outcome {
            self.selected_entry = 0;
        }
        if let LoadOutcome::Failed { .. } = outcome {
            self.set_status("Feed failed to load");
        }
        self.clamp_selections();
        self.needs_redraw = true;
        outcome
    }

    /// The menu-icon gesture. Returns the new `hidden` value.
    pub fn toggle_menu(&mut self) -> bool {
        let hidden = self.menu.toggle(&mut self.page);
        if !hidden {
            self.menu_cursor = self.current_feed.unwrap_or(0);
        }
        self.needs_redraw = true;
        hidden
    }

    /// Load the feed highlighted in the menu and close the menu.
    pub fn select_menu_feed(&mut self) -> Result<u64, RegistryError> {
        let generation = self.load_feed(self.menu_cursor, None)?;
        self.menu.hide(&mut self.page);
        Ok(generation)
    }

    /// Reload whichever feed was requested last.
    pub fn reload_current(&mut self) -> Option<Result<u64, RegistryError>> {
        let index = self.current_feed?;
        Some(self.load_feed(index, None))
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.page.entries.get(self.selected_entry)
    }

    pub fn clamp_selections(&mut self) {
        self.selected_entry = self
            .selected_entry
            .min(self.page.entries.len().saturating_sub(1));
        self.menu_cursor = self.menu_cursor.min(self.registry.len().saturating_sub(1));
    }

    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if older than 3 seconds.
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{FeedPayload, FetchError};
    use crate::registry::FeedDescriptor;
    use futures::future::BoxFuture;
    use futures::FutureExt;

    struct OneEntryTransport;

    impl Transport for OneEntryTransport {
        fn fetch(&self, url: &str) -> BoxFuture<'static, Result<FeedPayload, FetchError>> {
            let url = url.to_string();
            async move {
                Ok(FeedPayload {
                    title: None,
                    entries: vec![Entry {
                        id: url.clone(),
                        title: url,
                        link: None,
                        summary: None,
                        published: None,
                    }],
                })
            }
            .boxed()
        }
    }

    fn app() -> (App, mpsc::Receiver<LoadEvent>) {
        let (tx, rx) = mpsc::channel(8);
        let registry = FeedRegistry::new(vec![
            FeedDescriptor::new("A", "https://a.example.com/feed").unwrap(),
            FeedDescriptor::new("B", "https://b.example.com/feed").unwrap(),
        ]);
        (
            App::new(&Config::default(), registry, Arc::new(OneEntryTransport), tx),
            rx,
        )
    }

    #[tokio::test]
    async fn test_select_menu_feed_loads_and_hides_menu() {
        let (mut app, mut rx) = app();
        assert!(!app.toggle_menu());
        app.menu_cursor = 1;

        app.select_menu_feed().unwrap();
        assert!(app.menu.is_hidden());
        assert!(app.page.menu_hidden);
        assert_eq!(app.current_feed, Some(1));

        let outcome = app.handle_load_event(rx.recv().await.unwrap());
        assert_eq!(outcome, LoadOutcome::Loaded { index: 1, entries: 1 });
        assert_eq!(app.page.header_title, "B");
    }

    #[tokio::test]
    async fn test_reload_current() {
        let (mut app, mut rx) = app();
        assert!(app.reload_current().is_none());

        app.load_feed(0, None).unwrap();
        app.handle_load_event(rx.recv().await.unwrap());
        let generation = app.reload_current().unwrap().unwrap();
        assert_eq!(generation, 2);
        app.handle_load_event(rx.recv().await.unwrap());
        assert_eq!(app.page.header_title, "A");
    }

    #[test]
    fn test_empty_registry_shows_error() {
        let (tx, _rx) = mpsc::channel(1);
        let app = App::new(
            &Config::default(),
            FeedRegistry::new(Vec::new()),
            Arc::new(OneEntryTransport),
            tx,
        );
        assert_eq!(app.page.error_text(), "No feeds configured");
    }

    #[test]
    fn test_invalid_descriptor_reported_at_startup() {
        let (tx, _rx) = mpsc::channel(1);
        let registry = FeedRegistry::new(vec![FeedDescriptor {
            name: "  ".to_string(),
            url: "https://a.example.com/feed".to_string(),
        }]);
        let app = App::new(&Config::default(), registry, Arc::new(OneEntryTransport), tx);
        assert!(app.page.error_text().starts_with("Feed has no name"));
    }

    #[test]
    fn test_valid_registry_starts_without_error() {
        let (tx, _rx) = mpsc::channel(1);
        let app = App::new(
            &Config::default(),
            FeedRegistry::default(),
            Arc::new(OneEntryTransport),
            tx,
        );
        assert_eq!(app.page.error_text(), "");
    }
}
