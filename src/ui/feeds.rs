use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use super::render::panel;

/// Render the slide-out feed menu
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.registry.is_empty() {
        vec![ListItem::new("No feeds configured")]
    } else {
        app.registry
            .iter()
            .enumerate()
            .map(|(i, feed)| {
                let marker = if app.current_feed == Some(i) { "● " } else { "  " };

                let style = if i == app.menu_cursor {
                    Style::default().bg(Color::DarkGray).fg(Color::White)
                } else if app.current_feed == Some(i) {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(format!("{} {}", i + 1, feed.name), style),
                ]))
            })
            .collect()
    };

    let title = format!("Feeds ({})", app.registry.len());
    f.render_widget(List::new(items).block(panel(title, true)), area);
}
