use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::{App, Focus};
use crate::chat::chat_render;
use crate::input::input_render;
use crate::suggestions::suggestion_render;

pub const SEARCH_INPUT_HEIGHT: u16 = 3;
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Share of the width given to the search column when the chat is shown
const SEARCH_COLUMN_PERCENT: u16 = 40;

const KEY_HINTS: &str =
    " Tab: focus | F2: chat | ↑↓: select | Enter/Ctrl+Y: copy | Esc: close/quit ";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());
        let body = layout[0];
        let status_area = layout[1];

        let (search_column, chat_area) = if self.chat.visible {
            let columns = Layout::horizontal([
                Constraint::Percentage(SEARCH_COLUMN_PERCENT),
                Constraint::Percentage(100 - SEARCH_COLUMN_PERCENT),
            ])
            .split(body);
            (columns[0], Some(columns[1]))
        } else {
            (body, None)
        };

        let search_area = self.render_search_column(frame, search_column);

        if let Some(area) = chat_area {
            let areas = chat_render::render_panel(
                &mut self.chat,
                frame,
                area,
                self.focus == Focus::Chat,
                self.frame_count,
            );
            self.layout_regions.transcript = Some(areas.transcript);
            self.layout_regions.chat_input = Some(areas.input);
            self.layout_regions.send_button = Some(areas.send_button);
        }

        self.render_status_bar(frame, status_area);

        // Dropdown last so it draws over everything below the search box
        self.layout_regions.suggestions =
            suggestion_render::render_dropdown(&mut self.suggestions, frame, search_area);
    }

    /// Render the search box and the space under it; returns the box area
    fn render_search_column(&mut self, frame: &mut Frame, area: Rect) -> Rect {
        let layout = Layout::vertical([
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);
        let search_area = layout[0];

        let title = if self.suggestions.is_searching() {
            Line::from(" Rechercher un arrêt … ")
        } else {
            Line::from(" Rechercher un arrêt ")
        };
        input_render::render_field(
            frame,
            search_area,
            &mut self.search_input,
            title,
            self.focus == Focus::Search,
        );
        self.layout_regions.search_input = Some(search_area);

        if layout[1].height > 0 {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray));
            let hint = Paragraph::new(Line::from(Span::styled(
                " Au moins 3 lettres pour chercher un arrêt",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            frame.render_widget(hint, layout[1]);
        }

        search_area
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status_message {
            Some(message) => Line::from(Span::styled(
                format!(" {} ", message),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
