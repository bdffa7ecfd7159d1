//! Stop search suggestions
//!
//! Search-as-you-type over the backend's stop names, with a dropdown of
//! results and a copy-to-clipboard affordance on every row.

pub mod suggestion_events;
mod suggestion_item;
pub mod suggestion_render;
mod suggestion_state;
mod suggestion_worker;

pub use suggestion_item::{COPY_FEEDBACK, CopyState, HoverState, ItemEvent, SuggestionItem};
pub use suggestion_state::{
    MAX_VISIBLE_SUGGESTIONS, MIN_QUERY_LEN, SearchRequest, SearchResponse, SuggestionState,
};
pub use suggestion_worker::spawn_worker;
