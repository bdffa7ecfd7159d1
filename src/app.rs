//! Application shell
//!
//! Owns both features, routes terminal events to the focused one and lays
//! them out on screen.

mod app_events;
mod app_render;
mod app_state;
mod mouse_click;
mod mouse_hover;

pub use app_render::{SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
pub use app_state::{App, Focus};
