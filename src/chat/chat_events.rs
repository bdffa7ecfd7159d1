//! Key handling for the focused chat panel

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Handle a key while the chat input has focus
///
/// Returns true if the key was consumed.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            // A pending request keeps Enter inert; the button is disabled too
            if !app.chat.is_pending() {
                app.chat.submit_input(&app.session);
            }
            true
        }
        KeyCode::PageUp => {
            app.chat.scroll.page_up();
            true
        }
        KeyCode::PageDown => {
            app.chat.scroll.page_down();
            true
        }
        KeyCode::End if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.chat.scroll.jump_to_bottom();
            true
        }
        _ => app.chat.input.handle_key(key),
    }
}

/// Activate the send button
pub fn press_send(app: &mut App) {
    if app.chat.send_enabled() {
        app.chat.submit_input(&app.session);
    }
}

#[cfg(test)]
#[path = "chat_events_tests.rs"]
mod chat_events_tests;
