//! Stop search dropdown rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{SuggestionItem, SuggestionState};
use crate::widgets::popup;

pub const COPY_ICON: &str = "📋";
pub const COPY_HELPER: &str = "Copier cet arrêt";
pub const COPIED_LABEL: &str = "✓ Copié";

const SELECTED_BG: Color = Color::DarkGray;

/// Render the dropdown below the search box
///
/// Returns the dropdown area for region tracking, or None when hidden.
pub fn render_dropdown(state: &mut SuggestionState, frame: &mut Frame, anchor: Rect) -> Option<Rect> {
    if !state.is_visible() {
        return None;
    }

    let bounds = frame.area();
    let room = bounds.bottom().saturating_sub(anchor.bottom());
    state.set_viewport_rows(room.saturating_sub(2) as usize);

    let height = state.visible_count() as u16 + 2; // +2 for borders
    let area = popup::popup_below_anchor(anchor, bounds, anchor.width, height, 0);
    if area.height < 3 || area.width < 4 {
        return None;
    }

    popup::clear_area(frame, area);

    let row_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .visible_items()
        .map(|(index, item)| {
            let selected = state.selected() == Some(index);
            ListItem::new(item_line(item, row_width, selected))
        })
        .collect();

    let title = format!(" Arrêts ({}) ", state.items().len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(List::new(items).block(block), area);

    Some(area)
}

/// One dropdown row: the label on the left, the copy affordance on the right
pub fn item_line(item: &SuggestionItem, width: usize, selected: bool) -> Line<'static> {
    let bg = if selected { SELECTED_BG } else { Color::Black };
    let base = Style::default().bg(bg);

    let affordance: Vec<Span<'static>> = if item.is_copied() {
        vec![Span::styled(
            COPIED_LABEL,
            base.fg(Color::Green).add_modifier(Modifier::BOLD),
        )]
    } else if item.shows_helper() {
        vec![
            Span::styled(COPY_HELPER, base.fg(Color::Gray)),
            Span::styled(" ", base),
            Span::styled(COPY_ICON, base),
        ]
    } else {
        vec![Span::styled(COPY_ICON, base)]
    };
    let affordance_width: usize = affordance.iter().map(|s| s.content.width()).sum();

    // Leave one column of padding on each side and one before the affordance
    let label_room = width.saturating_sub(affordance_width + 3);
    let label = truncate_to_width(&item.label, label_room);
    let gap = width.saturating_sub(label.width() + affordance_width + 2);

    let label_style = if selected {
        base.fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        base.fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(" ", base),
        Span::styled(label, label_style),
        Span::styled(" ".repeat(gap), base),
    ];
    spans.extend(affordance);
    spans.push(Span::styled(" ", base));

    Line::from(spans)
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "suggestion_render_tests.rs"]
mod suggestion_render_tests;
