//! Render functions for the TUI.
//!
//! Layout, top to bottom: header, body (menu panel + entry list), error
//! region, status bar. The error region is always reserved so a failed load
//! is visible no matter what else is on screen.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{entries, feeds, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 40;
pub(super) const MIN_HEIGHT: u16 = 8;

/// Share of the body width taken by the open menu panel.
const MENU_PERCENT: u16 = 30;

pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    render_body(f, app, chunks[1]);
    render_error_region(f, app, chunks[2]);
    status::render(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let icon_style = if app.page.menu_hidden {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    let title = Line::from(vec![
        Span::styled(" ☰ ", icon_style),
        Span::styled(
            app.page.header_title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let subtitle = Line::from(Span::styled(
        format!("   {}", app.page.subtitle.as_deref().unwrap_or("")),
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(Paragraph::new(vec![title, subtitle]), area);
}

fn render_body(f: &mut Frame, app: &App, area: Rect) {
    if app.page.menu_hidden {
        entries::render(f, app, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(MENU_PERCENT),
            Constraint::Percentage(100 - MENU_PERCENT),
        ])
        .split(area);

    feeds::render(f, app, columns[0]);
    entries::render(f, app, columns[1]);
}

fn render_error_region(f: &mut Frame, app: &App, area: Rect) {
    let text = app.page.error_text();
    let paragraph = if text.is_empty() {
        Paragraph::new("")
    } else {
        Paragraph::new(format!(" ⚠ {}", text))
            .style(Style::default().fg(Color::White).bg(Color::Red))
    };
    f.render_widget(paragraph, area);
}

/// Bordered block used by the body panels.
pub(super) fn panel(title: String, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}
