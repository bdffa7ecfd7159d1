//! Screen regions recorded during render

use ratatui::layout::Rect;

/// Clickable or hoverable parts of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchInput,
    Suggestions,
    Transcript,
    ChatInput,
    SendButton,
}

/// Where each component was drawn on the last frame
///
/// `None` means the component was not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutRegions {
    pub search_input: Option<Rect>,
    pub suggestions: Option<Rect>,
    pub transcript: Option<Rect>,
    pub chat_input: Option<Rect>,
    pub send_button: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
