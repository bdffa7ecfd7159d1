//! Tests for mouse hover handling

use ratatui::crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::*;
use crate::suggestions::HoverState;
use crate::test_utils::test_helpers::{WiredApp, answer_search, wired_app};

fn mouse_at(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

/// Three suggestions in a dropdown drawn at rows 3..8 (borders at 3 and 7)
fn app_with_dropdown() -> WiredApp {
    let mut wired = wired_app();
    wired.app.suggestions.fetch_suggestions("Gen");
    answer_search(&mut wired, &["Genève", "Genolier", "Genthod"]);
    wired.app.layout_regions.suggestions = Some(Rect::new(0, 3, 40, 5));
    wired
}

#[test]
fn test_hover_row_shows_helper() {
    let mut wired = app_with_dropdown();

    handle_hover(&mut wired.app, Some(Region::Suggestions), mouse_at(5, 5));

    assert_eq!(wired.app.suggestions.selected(), Some(1));
    assert!(wired.app.suggestions.items()[1].shows_helper());
}

#[test]
fn test_moving_between_rows_moves_helper() {
    let mut wired = app_with_dropdown();

    handle_hover(&mut wired.app, Some(Region::Suggestions), mouse_at(5, 4));
    handle_hover(&mut wired.app, Some(Region::Suggestions), mouse_at(5, 6));

    let items = wired.app.suggestions.items();
    assert_eq!(items[0].hover(), HoverState::Idle);
    assert_eq!(items[2].hover(), HoverState::Hovering);
}

#[test]
fn test_hover_on_border_selects_nothing() {
    let mut wired = app_with_dropdown();

    handle_hover(&mut wired.app, Some(Region::Suggestions), mouse_at(5, 3));
    assert_eq!(wired.app.suggestions.selected(), None);

    handle_hover(&mut wired.app, Some(Region::Suggestions), mouse_at(5, 7));
    assert_eq!(wired.app.suggestions.selected(), None);
}

#[test]
fn test_leaving_dropdown_hides_helper() {
    let mut wired = app_with_dropdown();
    handle_hover(&mut wired.app, Some(Region::Suggestions), mouse_at(5, 4));

    handle_hover(&mut wired.app, Some(Region::Transcript), mouse_at(50, 4));

    assert_eq!(wired.app.suggestions.selected(), None);
    assert!(!wired.app.suggestions.items()[0].shows_helper());
}

#[test]
fn test_suggestion_under_cursor_without_dropdown() {
    let wired = wired_app();
    assert_eq!(suggestion_under_cursor(&wired.app, mouse_at(5, 4)), None);
}
