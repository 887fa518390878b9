//! Presentation port and the in-memory page it drives.
//!
//! The loader and the menu controller only talk to [`Presenter`]. The
//! terminal UI draws whatever [`PageView`] currently holds, and tests read
//! the same struct to check what a user would see.
use std::sync::Arc;

use crate::feed::Entry;

/// Named regions of the page, addressed by role.
pub trait Presenter {
    /// Swap the entry list, header title and subtitle in one step.
    ///
    /// Clears the error region and the loading indicator.
    fn render_entries(
        &mut self,
        header_title: &str,
        subtitle: Option<&str>,
        entries: Arc<Vec<Entry>>,
    );

    /// Show a load failure for the feed named `header_title`.
    ///
    /// The header switches to the failed feed. Clears the entry list and the
    /// loading indicator.
    fn show_error(&mut self, header_title: &str, message: &str);

    /// Show (`Some(feed name)`) or clear the loading indicator.
    ///
    /// Never touches the entry list: the previous feed stays visible until
    /// the new one settles.
    fn set_loading(&mut self, feed_name: Option<&str>);

    fn set_menu_hidden(&mut self, hidden: bool);
}

/// What the page currently shows.
#[derive(Debug, Clone)]
pub struct PageView {
    pub header_title: String,
    pub subtitle: Option<String>,
    pub entries: Arc<Vec<Entry>>,
    pub error: Option<String>,
    pub loading: Option<String>,
    pub menu_hidden: bool,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            header_title: "Feeds".to_string(),
            subtitle: None,
            entries: Arc::new(Vec::new()),
            error: None,
            loading: None,
            menu_hidden: true,
        }
    }
}

impl PageView {
    /// Title of the first rendered entry, if any.
    pub fn first_entry_title(&self) -> Option<&str> {
        self.entries.first().map(|e| e.title.as_str())
    }

    /// Text of the error region (empty when there is no error).
    pub fn error_text(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }
}

impl Presenter for PageView {
    fn render_entries(
        &mut self,
        header_title: &str,
        subtitle: Option<&str>,
        entries: Arc<Vec<Entry>>,
    ) {
        self.header_title = header_title.to_string();
        self.subtitle = subtitle.map(str::to_string);
        self.entries = entries;
        self.error = None;
        self.loading = None;
    }

    fn show_error(&mut self, header_title: &str, message: &str) {
        self.header_title = header_title.to_string();
        self.error = Some(message.to_string());
        self.entries = Arc::new(Vec::new());
        self.subtitle = None;
        self.loading = None;
    }

    fn set_loading(&mut self, feed_name: Option<&str>) {
        self.loading = feed_name.map(str::to_string);
    }

    fn set_menu_hidden(&mut self, hidden: bool) {
        self.menu_hidden = hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> Entry {
        Entry {
            id: title.to_string(),
            title: title.to_string(),
            link: None,
            summary: None,
            published: None,
        }
    }

    #[test]
    fn test_render_entries_replaces_everything() {
        let mut page = PageView::default();
        page.show_error("Feed", "boom");
        page.set_loading(Some("Feed"));

        page.render_entries("Feed", Some("Channel"), Arc::new(vec![entry("a"), entry("b")]));

        assert_eq!(page.header_title, "Feed");
        assert_eq!(page.subtitle.as_deref(), Some("Channel"));
        assert_eq!(page.entries.len(), 2);
        assert_eq!(page.first_entry_title(), Some("a"));
        assert_eq!(page.error_text(), "");
        assert!(page.loading.is_none());
    }

    #[test]
    fn test_loading_keeps_previous_entries() {
        let mut page = PageView::default();
        page.render_entries("Old", None, Arc::new(vec![entry("old")]));

        page.set_loading(Some("New"));

        assert_eq!(page.header_title, "Old");
        assert_eq!(page.first_entry_title(), Some("old"));
        assert_eq!(page.loading.as_deref(), Some("New"));
    }

    #[test]
    fn test_show_error_clears_entries() {
        let mut page = PageView::default();
        page.render_entries("Old", None, Arc::new(vec![entry("old")]));

        page.show_error("Test", "Could not load Test");

        assert!(page.entries.is_empty());
        assert_eq!(page.error_text(), "Could not load Test");
        assert_eq!(page.header_title, "Test");
    }
}
