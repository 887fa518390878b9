use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::borrow::Cow;

const SPINNER: [&str; super::loop_runner::SPINNER_FRAMES] =
    ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let text: Cow<'_, str> = if let Some(name) = &app.page.loading {
        Cow::Owned(format!("{} Loading {}...", SPINNER[app.spinner_frame % SPINNER.len()], name))
    } else if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if app.menu.is_hidden() {
        Cow::Borrowed("[m]enu [j/k]move [o]pen [r]eload [1-9]feed [q]uit")
    } else {
        Cow::Borrowed("[m]/[Esc] close [j/k]move [Enter]load [q]uit")
    };

    let style = Style::default().bg(Color::DarkGray).fg(Color::White);
    f.render_widget(Paragraph::new(text).style(style), area);
}
