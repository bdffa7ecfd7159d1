//! Mouse hover handling
//!
//! Moving over a dropdown row highlights it and shows its copy helper.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::Region;

/// Handle mouse hover for the given region
pub fn handle_hover(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Suggestions) => hover_suggestions(app, mouse),
        _ => clear_suggestion_hover(app),
    }
}

fn hover_suggestions(app: &mut App, mouse: MouseEvent) {
    let index = suggestion_under_cursor(app, mouse);
    app.suggestions.set_selected(index);
}

/// Index of the dropdown item under the cursor, if any
///
/// Rows start inside the top border; the borders themselves map to nothing.
pub fn suggestion_under_cursor(app: &App, mouse: MouseEvent) -> Option<usize> {
    let area = app.layout_regions.suggestions?;

    let inner_top = area.y.saturating_add(1);
    let inner_bottom = area.y.saturating_add(area.height).saturating_sub(1);
    if mouse.row < inner_top || mouse.row >= inner_bottom {
        return None;
    }

    app.suggestions
        .index_at_row(mouse.row.saturating_sub(inner_top) as usize)
}

fn clear_suggestion_hover(app: &mut App) {
    if app.suggestions.selected().is_some() {
        app.suggestions.set_selected(None);
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
