//! Chat panel rendering
//!
//! Draws the transcript, the message input and the send button. The
//! transcript is wrapped here so its scroll bounds match what is on screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::{ChatState, ChatTurn, Role, TurnBody};
use crate::input::input_render;
use crate::widgets::wrap::wrap_line;

pub const CHAT_INPUT_HEIGHT: u16 = 3;
pub const SEND_BUTTON_WIDTH: u16 = 13;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const EMPTY_HINT: &str = "Posez une question sur vos trajets en transports publics.";

/// Screen areas of the chat panel, for mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChatAreas {
    pub transcript: Rect,
    pub input: Rect,
    pub send_button: Rect,
}

/// Spinner glyph for the given frame
pub fn spinner_frame(frame_count: u64) -> &'static str {
    SPINNER_FRAMES[(frame_count % SPINNER_FRAMES.len() as u64) as usize]
}

/// Render the whole chat panel into `area`
pub fn render_panel(
    chat: &mut ChatState,
    frame: &mut Frame,
    area: Rect,
    focused: bool,
    frame_count: u64,
) -> ChatAreas {
    let layout = Layout::vertical([
        Constraint::Min(3),                    // Transcript
        Constraint::Length(CHAT_INPUT_HEIGHT), // Input row
    ])
    .split(area);

    let input_row = Layout::horizontal([
        Constraint::Min(10),
        Constraint::Length(SEND_BUTTON_WIDTH),
    ])
    .split(layout[1]);

    let areas = ChatAreas {
        transcript: layout[0],
        input: input_row[0],
        send_button: input_row[1],
    };

    render_transcript(chat, frame, areas.transcript);

    let title = if chat.is_pending() {
        Line::from(vec![
            Span::raw(" Message "),
            Span::styled(
                format!("{} ", spinner_frame(frame_count)),
                Style::default().fg(Color::Yellow),
            ),
        ])
    } else {
        Line::from(" Message ")
    };
    input_render::render_field(frame, areas.input, &mut chat.input, title, focused);

    render_send_button(frame, areas.send_button, chat.send_enabled());

    areas
}

fn render_transcript(chat: &mut ChatState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Assistant transports ")
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if chat.transcript().is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            EMPTY_HINT,
            Style::default().fg(Color::DarkGray),
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(hint, inner);
        return;
    }

    let rows = transcript_rows(chat.transcript(), inner.width);
    chat.scroll.update_bounds(rows.len() as u32, inner.height);
    if chat.take_follow_latest() {
        chat.scroll.jump_to_bottom();
    }

    let paragraph = Paragraph::new(rows).scroll((chat.scroll.offset, 0));
    frame.render_widget(paragraph, inner);
}

/// Lay out the transcript as wrapped rows
///
/// Each turn is a role header followed by its body; turns are separated by
/// one blank row.
pub fn transcript_rows(turns: &[ChatTurn], width: u16) -> Vec<Line<'static>> {
    let mut rows = Vec::new();

    for (i, turn) in turns.iter().enumerate() {
        if i > 0 {
            rows.push(Line::default());
        }

        rows.push(role_header(turn.role));

        match &turn.body {
            TurnBody::Plain(text) => {
                for line in text.split('\n') {
                    rows.extend(wrap_line(&Line::raw(line), width));
                }
            }
            TurnBody::Rich { text, .. } => {
                for line in &text.lines {
                    rows.extend(wrap_line(line, width));
                }
            }
        }
    }

    rows
}

fn role_header(role: Role) -> Line<'static> {
    let (label, color) = match role {
        Role::User => ("Vous", Color::Cyan),
        Role::Bot => ("Assistant", Color::Green),
    };
    Line::from(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn render_send_button(frame: &mut Frame, area: Rect, enabled: bool) {
    let color = if enabled { Color::Green } else { Color::DarkGray };

    let button = Paragraph::new(Line::from(Span::styled(
        "Envoyer",
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(button, area);
}

#[cfg(test)]
#[path = "chat_render_tests.rs"]
mod chat_render_tests;
