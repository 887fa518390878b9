use crate::app::App;
use crate::util::truncate_to_width;
use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use super::render::panel;

/// Format timestamp as relative time
pub fn format_relative_time(timestamp: Option<i64>) -> String {
    let Some(ts) = timestamp else {
        return String::new();
    };

    let diff = Utc::now().timestamp() - ts;

    // Future dates (malformed feeds)
    if diff < 0 {
        return "now".to_string();
    }
    if diff < 3600 {
        return format!("{}m", diff / 60);
    }
    if diff < 86400 {
        return format!("{}h", diff / 3600);
    }
    if diff < 604800 {
        return format!("{}d", diff / 86400);
    }

    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%b %d").to_string())
        .unwrap_or_default()
}

/// Render the entry list
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let page = &app.page;

    let items: Vec<ListItem> = if page.entries.is_empty() {
        let placeholder = if page.loading.is_some() {
            "Loading..."
        } else if page.error.is_some() {
            "Nothing to show"
        } else {
            "No entries"
        };
        vec![ListItem::new(placeholder)]
    } else {
        // Room for borders and the timestamp column
        let max_title = area.width.saturating_sub(10) as usize;

        page.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == app.selected_entry && page.menu_hidden {
                    Style::default().bg(Color::DarkGray).fg(Color::White)
                } else {
                    Style::default()
                };

                let mut spans = vec![Span::styled(
                    truncate_to_width(&entry.title, max_title).into_owned(),
                    style,
                )];
                let time = format_relative_time(entry.published);
                if !time.is_empty() {
                    spans.push(Span::styled(
                        format!("  {}", time),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let title = format!("Entries ({})", page.entries.len());
    f.render_widget(List::new(items).block(panel(title, page.menu_hidden)), area);
}
