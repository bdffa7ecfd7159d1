use std::sync::mpsc;
use std::time::Instant;

use crate::backend::BackendClient;
use crate::chat::{self, ChatState};
use crate::config::{ClipboardBackend, Config};
use crate::error::StopChatError;
use crate::input::InputField;
use crate::layout::LayoutRegions;
use crate::session::SessionContext;
use crate::suggestions::{self, SuggestionState};

/// Which input receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Chat,
}

/// Application state
pub struct App {
    pub session: SessionContext,
    pub chat: ChatState,
    pub suggestions: SuggestionState,
    pub search_input: InputField,
    pub focus: Focus,
    pub clipboard_backend: ClipboardBackend,
    pub layout_regions: LayoutRegions,
    /// One-line message shown in the status bar instead of the key hints
    pub status_message: Option<String>,
    /// Render counter driving the spinner animation
    pub frame_count: u64,
    pub should_quit: bool,
}

impl App {
    /// Create a new App; call `connect` to attach the backend workers
    pub fn new(config: &Config, session: SessionContext) -> Self {
        let chat = ChatState::new(&config.chat);
        let focus = if chat.visible {
            Focus::Chat
        } else {
            Focus::Search
        };

        Self {
            session,
            chat,
            suggestions: SuggestionState::new(),
            search_input: InputField::new(),
            focus,
            clipboard_backend: config.clipboard.backend,
            layout_regions: LayoutRegions::new(),
            status_message: None,
            frame_count: 0,
            should_quit: false,
        }
    }

    /// Spawn the chat and search workers and wire their channels
    pub fn connect(&mut self, client: BackendClient) -> Result<(), StopChatError> {
        let (chat_request_tx, chat_request_rx) = mpsc::channel();
        let (chat_response_tx, chat_response_rx) = mpsc::channel();
        chat::spawn_worker(client.clone(), chat_request_rx, chat_response_tx)?;
        self.chat.set_channels(chat_request_tx, chat_response_rx);

        let (search_request_tx, search_request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (search_response_tx, search_response_rx) = mpsc::channel();
        suggestions::spawn_worker(client, search_request_rx, search_response_tx)?;
        self.suggestions
            .set_channels(search_request_tx, search_response_rx);

        Ok(())
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Show or hide the chat panel
    ///
    /// Hiding moves focus to the search box; showing focuses the chat input.
    pub fn toggle_chat(&mut self) {
        self.chat.toggle_visibility();
        self.focus = if self.chat.visible {
            Focus::Chat
        } else {
            Focus::Search
        };
    }

    /// Switch focus between the search box and the chat input
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search if self.chat.visible => Focus::Chat,
            Focus::Search => Focus::Search,
            Focus::Chat => Focus::Search,
        };
    }

    /// Collect worker responses and expire copy feedback
    ///
    /// Returns true if anything visible changed.
    pub fn poll_workers(&mut self, now: Instant) -> bool {
        let mut changed = self.chat.poll_response();
        if self.chat.take_focus_request() && self.chat.visible {
            self.focus = Focus::Chat;
        }

        changed |= self.suggestions.poll_response();
        changed |= self.suggestions.tick(now);
        changed
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
