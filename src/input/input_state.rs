use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Single-line text input that can be disabled
///
/// While disabled every editing key is ignored; the text is kept.
pub struct InputField {
    pub textarea: TextArea<'static>,
    enabled: bool,
}

impl InputField {
    pub fn new() -> Self {
        Self {
            textarea: new_textarea(),
            enabled: true,
        }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn clear(&mut self) {
        self.textarea = new_textarea();
    }

    #[cfg(test)]
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.textarea.insert_str(text);
    }

    /// Feed an editing key to the field
    ///
    /// Returns true if the text changed. Enter never inserts a newline, and
    /// nothing happens while the field is disabled.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.enabled {
            return false;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => false,
            KeyCode::Char('m') | KeyCode::Char('j')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                false
            }
            _ => {
                let before = self.text().to_string();
                self.textarea.input(key);
                self.text() != before
            }
        }
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

fn new_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
