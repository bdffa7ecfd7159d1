//! Tests for layout region tracking

use ratatui::layout::Rect;

use super::*;

#[test]
fn test_new_regions_are_empty() {
    let regions = LayoutRegions::new();
    assert_eq!(regions, LayoutRegions::default());
    assert!(regions.suggestions.is_none());
}

#[test]
fn test_clear_forgets_every_region() {
    let mut regions = LayoutRegions {
        search_input: Some(Rect::new(0, 0, 40, 3)),
        suggestions: Some(Rect::new(0, 3, 40, 5)),
        transcript: Some(Rect::new(40, 0, 40, 20)),
        chat_input: Some(Rect::new(40, 20, 27, 3)),
        send_button: Some(Rect::new(67, 20, 13, 3)),
    };

    regions.clear();

    assert_eq!(regions, LayoutRegions::default());
}
