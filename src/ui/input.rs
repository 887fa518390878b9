//! Keyboard input handling.
//!
//! Keys are routed to the slide-out menu while it is open and to the entry
//! list otherwise. `m` (the menu icon) and `q` work everywhere.

use crate::app::App;
use crate::util::validate_url_for_open;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> Result<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Ok(Action::Quit);
    }

    match code {
        KeyCode::Char('q') => return Ok(Action::Quit),
        KeyCode::Char('m') => {
            app.toggle_menu();
            return Ok(Action::Continue);
        }
        _ => {}
    }

    if app.menu.is_hidden() {
        handle_page_input(app, code)?;
    } else {
        handle_menu_input(app, code)?;
    }
    Ok(Action::Continue)
}

/// Input while the slide-out menu is open.
fn handle_menu_input(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.menu_cursor + 1 < app.registry.len() {
                app.menu_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.menu_cursor = app.menu_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            if !app.registry.is_empty() {
                app.select_menu_feed()?;
            }
        }
        KeyCode::Esc => app.menu.hide(&mut app.page),
        _ => {}
    }
    Ok(())
}

/// Input while the entry list has focus.
fn handle_page_input(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.selected_entry + 1 < app.page.entries.len() {
                app.selected_entry += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.selected_entry = app.selected_entry.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.selected_entry = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_entry = app.page.entries.len().saturating_sub(1);
        }
        KeyCode::Char('r') => {
            if let Some(result) = app.reload_current() {
                result?;
            }
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < app.registry.len() {
                app.load_feed(index, None)?;
            } else {
                app.set_status(format!("No feed #{}", index + 1));
            }
        }
        KeyCode::Char('o') | KeyCode::Enter => open_selected_entry(app),
        _ => {}
    }
    Ok(())
}

fn open_selected_entry(app: &mut App) {
    let Some(entry) = app.selected_entry() else {
        return;
    };
    let Some(link) = entry.link.clone() else {
        app.set_status("Entry has no link");
        return;
    };

    match validate_url_for_open(&link) {
        Err(e) => app.set_status(e),
        Ok(url) => {
            if let Err(e) = open::that(url.as_str()) {
                app.set_status(format!("Failed to open browser: {}", e));
            }
        }
    }
}
