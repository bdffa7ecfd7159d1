//! Input field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders},
};

use super::InputField;

/// Render a single-line input with a focus- and enabled-aware border
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: &mut InputField,
    title: Line<'static>,
    focused: bool,
) {
    let border_color = match (field.is_enabled(), focused) {
        (false, _) => Color::DarkGray,
        (true, true) => Color::Cyan,
        (true, false) => Color::Gray,
    };

    let text_style = if field.is_enabled() {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Only the focused, enabled field shows a cursor
    let cursor_style = if focused && field.is_enabled() {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    field.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );
    field.textarea.set_style(text_style);
    field.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&field.textarea, area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
