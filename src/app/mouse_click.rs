//! Mouse click handling
//!
//! Clicks move focus between the inputs, press the send button and copy
//! dropdown rows.

use std::time::Instant;

use ratatui::crossterm::event::MouseEvent;

use super::app_state::{App, Focus};
use super::mouse_hover::suggestion_under_cursor;
use crate::chat::chat_events;
use crate::layout::Region;
use crate::suggestions::suggestion_events;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Suggestions) => click_suggestion(app, mouse),
        Some(Region::SearchInput) => app.focus = Focus::Search,
        Some(Region::ChatInput) | Some(Region::Transcript) => focus_chat(app),
        Some(Region::SendButton) => {
            focus_chat(app);
            chat_events::press_send(app);
        }
        None => {}
    }
}

fn click_suggestion(app: &mut App, mouse: MouseEvent) {
    if let Some(index) = suggestion_under_cursor(app, mouse) {
        suggestion_events::copy_item(app, index, Instant::now());
    }
}

fn focus_chat(app: &mut App) {
    if app.chat.visible {
        app.focus = Focus::Chat;
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
