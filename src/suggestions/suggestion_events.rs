//! Key handling for the focused stop search box

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::clipboard::copy_to_clipboard;

/// Handle a key while the search box has focus
///
/// Returns true if the key was consumed. Every edit re-runs the search.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Down => {
            app.suggestions.select_next();
            true
        }
        KeyCode::Up => {
            app.suggestions.select_previous();
            true
        }
        KeyCode::Enter => {
            copy_selected(app, Instant::now());
            true
        }
        KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            copy_selected(app, Instant::now());
            true
        }
        _ => {
            if app.search_input.handle_key(key) {
                let query = app.search_input.text().to_string();
                app.suggestions.fetch_suggestions(&query);
                return true;
            }
            false
        }
    }
}

/// Copy the highlighted suggestion, if any
pub fn copy_selected(app: &mut App, now: Instant) -> bool {
    match app.suggestions.selected() {
        Some(index) => copy_item(app, index, now),
        None => false,
    }
}

/// Copy one suggestion's label with the configured clipboard backend
pub fn copy_item(app: &mut App, index: usize, now: Instant) -> bool {
    let backend = app.clipboard_backend;
    app.suggestions
        .copy_with(index, now, |text| copy_to_clipboard(text, backend))
}

#[cfg(test)]
#[path = "suggestion_events_tests.rs"]
mod suggestion_events_tests;
