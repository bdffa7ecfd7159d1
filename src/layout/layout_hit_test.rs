//! Region lookup for mouse positions

use ratatui::layout::{Position, Rect};

use super::{LayoutRegions, Region};

/// Find the region under a screen position
///
/// The dropdown overlaps whatever is below it, so it is checked first.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);
    let candidates: [(Option<Rect>, Region); 5] = [
        (regions.suggestions, Region::Suggestions),
        (regions.search_input, Region::SearchInput),
        (regions.send_button, Region::SendButton),
        (regions.chat_input, Region::ChatInput),
        (regions.transcript, Region::Transcript),
    ];

    candidates
        .into_iter()
        .find(|(rect, _)| rect.is_some_and(|r| r.contains(position)))
        .map(|(_, region)| region)
}
