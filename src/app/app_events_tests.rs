//! Tests for app-level event routing

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

use super::*;
use crate::chat::ChatRequest;
use crate::test_utils::test_helpers::{answer_search, key, key_with_mods, test_app, wired_app};

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

// =========================================================================
// Global keys
// =========================================================================

#[test]
fn test_ctrl_c_quits() {
    let mut app = test_app();
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_esc_quits_without_dropdown() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn test_esc_closes_dropdown_first() {
    let mut wired = wired_app();
    wired.app.focus = Focus::Search;
    type_text(&mut wired.app, "Gen");
    answer_search(&mut wired, &["Genève"]);

    wired.app.handle_key_event(key(KeyCode::Esc));
    assert!(!wired.app.should_quit());
    assert!(!wired.app.suggestions.is_visible());

    wired.app.handle_key_event(key(KeyCode::Esc));
    assert!(wired.app.should_quit());
}

#[test]
fn test_tab_switches_focus() {
    let mut app = test_app();
    assert_eq!(app.focus, Focus::Chat);

    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Search);

    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::Chat);
}

#[test]
fn test_f2_and_ctrl_t_toggle_chat() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::F(2)));
    assert!(!app.chat.visible);

    app.handle_key_event(key_with_mods(KeyCode::Char('t'), KeyModifiers::CONTROL));
    assert!(app.chat.visible);
}

// =========================================================================
// Focus routing
// =========================================================================

#[test]
fn test_keys_go_to_focused_input() {
    let mut app = test_app();

    type_text(&mut app, "Bonjour");
    app.handle_key_event(key(KeyCode::Tab));
    type_text(&mut app, "Bern");

    assert_eq!(app.chat.input.text(), "Bonjour");
    assert_eq!(app.search_input.text(), "Bern");
}

#[test]
fn test_enter_in_chat_sends_message() {
    let mut wired = wired_app();
    type_text(&mut wired.app, "Hello");

    wired.app.handle_key_event(key(KeyCode::Enter));

    let ChatRequest::Ask { query, session_id, .. } = wired.chat_requests.try_recv().unwrap();
    assert_eq!(query, "Hello");
    assert_eq!(session_id, *wired.app.session.session_id());
}

#[test]
fn test_typing_in_search_fetches_suggestions() {
    let mut wired = wired_app();
    wired.app.focus = Focus::Search;

    type_text(&mut wired.app, "Lau");

    assert!(wired.search_requests.try_recv().is_ok());
}

#[test]
fn test_typing_clears_status_message() {
    let mut app = test_app();
    app.set_status("Invalid config, using defaults");

    type_text(&mut app, "x");

    assert_eq!(app.status_message, None);
}

#[test]
fn test_only_key_presses_are_handled() {
    let mut app = test_app();
    let release = KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Release,
        state: KeyEventState::empty(),
    };

    app.handle_event(Event::Key(release));
    assert_eq!(app.chat.input.text(), "");

    app.handle_event(Event::Key(key(KeyCode::Char('a'))));
    assert_eq!(app.chat.input.text(), "a");
}

// =========================================================================
// Mouse routing
// =========================================================================

#[test]
fn test_mouse_scroll_over_transcript() {
    let mut app = test_app();
    app.layout_regions.transcript = Some(Rect::new(40, 0, 40, 20));
    app.chat.scroll.update_bounds(100, 18);

    app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 50, 5));
    assert_eq!(app.chat.scroll.offset, 3);

    app.handle_mouse_event(mouse(MouseEventKind::ScrollUp, 50, 5));
    assert_eq!(app.chat.scroll.offset, 0);
}

#[test]
fn test_mouse_scroll_elsewhere_is_ignored() {
    let mut app = test_app();
    app.layout_regions.transcript = Some(Rect::new(40, 0, 40, 20));
    app.chat.scroll.update_bounds(100, 18);

    app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 5, 5));

    assert_eq!(app.chat.scroll.offset, 0);
}

#[test]
fn test_click_routes_through_layout_regions() {
    let mut app = test_app();
    app.layout_regions.search_input = Some(Rect::new(0, 0, 40, 3));

    app.handle_event(Event::Mouse(mouse(
        MouseEventKind::Down(MouseButton::Left),
        5,
        1,
    )));

    assert_eq!(app.focus, Focus::Search);
}
