use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::{App, Focus};
use super::{mouse_click, mouse_hover};
use crate::chat::chat_events;
use crate::layout::{Region, region_at};
use crate::suggestions::suggestion_events;

const MOUSE_SCROLL_LINES: u16 = 3;

impl App {
    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only key presses; releases and repeats would double every key
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        // A typed key replaces any leftover status message with the hints
        self.status_message = None;

        match self.focus {
            Focus::Chat => {
                chat_events::handle_key(self, key);
            }
            Focus::Search => {
                suggestion_events::handle_key(self, key);
            }
        }
    }

    /// Handle keys that work regardless of focus
    ///
    /// Returns true if the key was handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Esc => {
                if self.suggestions.is_visible() {
                    self.suggestions.dismiss();
                } else {
                    self.should_quit = true;
                }
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.cycle_focus();
                true
            }
            KeyCode::F(2) => {
                self.toggle_chat();
                true
            }
            KeyCode::Char('t') if ctrl => {
                self.toggle_chat();
                true
            }
            _ => false,
        }
    }

    /// Route a mouse event to the region under the cursor
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved => mouse_hover::handle_hover(self, region, mouse),
            MouseEventKind::Down(MouseButton::Left) => {
                mouse_click::handle_click(self, region, mouse)
            }
            MouseEventKind::ScrollDown if region == Some(Region::Transcript) => {
                self.chat.scroll.scroll_down(MOUSE_SCROLL_LINES)
            }
            MouseEventKind::ScrollUp if region == Some(Region::Transcript) => {
                self.chat.scroll.scroll_up(MOUSE_SCROLL_LINES)
            }
            MouseEventKind::ScrollDown if region == Some(Region::Suggestions) => {
                self.suggestions.select_next()
            }
            MouseEventKind::ScrollUp if region == Some(Region::Suggestions) => {
                self.suggestions.select_previous()
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
