//! Screen regions for mouse dispatch
//!
//! Rendering records where the search box, the stop dropdown, the transcript,
//! the chat input and the send button landed. Mouse events are then routed by
//! `region_at()`; the dropdown wins wherever it overlaps the panels below
//! the search box.

mod layout_hit_test;
mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};

#[cfg(test)]
#[path = "layout/layout_regions_tests.rs"]
mod layout_regions_tests;
