//! Stop search dropdown state
//!
//! Issues a search for every edit of at least `MIN_QUERY_LEN` characters and
//! shows only the answer to the most recent one.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Instant;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use super::suggestion_item::{ItemEvent, SuggestionItem};
use crate::backend::{BackendError, Stop};
use crate::clipboard::ClipboardResult;

/// Queries shorter than this (in characters) hide the dropdown
pub const MIN_QUERY_LEN: usize = 3;

/// Rows shown at once; longer lists scroll with the selection
pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;

/// Request messages sent to the search worker
#[derive(Debug)]
pub enum SearchRequest {
    Query {
        query: String,
        request_id: u64,
        cancel_token: CancellationToken,
    },
}

/// Response messages received from the search worker
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResponse {
    Results { request_id: u64, stops: Vec<Stop> },
    Failed { request_id: u64, error: BackendError },
    Cancelled { request_id: u64 },
}

/// Stop search dropdown state
#[derive(Default)]
pub struct SuggestionState {
    items: Vec<SuggestionItem>,
    visible: bool,
    /// Highlighted row, from keyboard selection or pointer hover
    selected: Option<usize>,
    scroll_offset: usize,
    /// Inner rows the dropdown had room for at the last render
    viewport_rows: Option<usize>,
    /// Latest issued request ID; only its response is shown
    request_id: u64,
    in_flight: Option<CancellationToken>,
    request_tx: Option<UnboundedSender<SearchRequest>>,
    response_rx: Option<Receiver<SearchResponse>>,
}

impl SuggestionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel handles for communication with the worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn items(&self) -> &[SuggestionItem] {
        &self.items
    }

    pub fn is_visible(&self) -> bool {
        self.visible && !self.items.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Items in the visible window, with their absolute index
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &SuggestionItem)> {
        self.items
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(self.window_rows())
    }

    pub fn visible_count(&self) -> usize {
        self.items
            .len()
            .saturating_sub(self.scroll_offset)
            .min(self.window_rows())
    }

    /// Rows in the scroll window, capped by the space left on screen
    fn window_rows(&self) -> usize {
        self.viewport_rows
            .map_or(MAX_VISIBLE_SUGGESTIONS, |rows| rows.clamp(1, MAX_VISIBLE_SUGGESTIONS))
    }

    /// Record how many rows fit below the search box, keeping the selection
    /// inside the window
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = Some(rows);
        let max_offset = self.items.len().saturating_sub(self.window_rows());
        self.scroll_offset = self.scroll_offset.min(max_offset);
        if let Some(selected) = self.selected {
            self.scroll_to(selected);
        }
    }

    /// Absolute index of the item on a given visible row
    pub fn index_at_row(&self, row: usize) -> Option<usize> {
        if row >= self.visible_count() {
            return None;
        }
        Some(self.scroll_offset + row)
    }

    /// Start a search for the current search box text
    ///
    /// Returns true if a request was dispatched. Short queries hide the
    /// dropdown and send nothing; any earlier search is cancelled either way.
    pub fn fetch_suggestions(&mut self, query: &str) -> bool {
        self.request_id = self.request_id.wrapping_add(1);
        self.cancel_in_flight();

        if query.chars().count() < MIN_QUERY_LEN {
            self.hide();
            return false;
        }

        let Some(tx) = &self.request_tx else {
            log::debug!("No search worker; ignoring query {:?}", query);
            self.hide();
            return false;
        };

        let cancel_token = CancellationToken::new();
        let request = SearchRequest::Query {
            query: query.to_string(),
            request_id: self.request_id,
            cancel_token: cancel_token.clone(),
        };

        if tx.send(request).is_err() {
            log::warn!("Search worker is gone; dropping query {:?}", query);
            self.request_tx = None;
            self.hide();
            return false;
        }

        log::debug!("Sent search request {} for {:?}", self.request_id, query);
        self.in_flight = Some(cancel_token);
        true
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }

    /// Drain worker responses
    ///
    /// Returns true if the dropdown changed.
    pub fn poll_response(&mut self) -> bool {
        let mut responses = Vec::new();
        let mut disconnected = false;

        if let Some(rx) = &self.response_rx {
            loop {
                match rx.try_recv() {
                    Ok(response) => responses.push(response),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }

        let mut changed = false;
        for response in responses {
            changed |= self.handle_response(response);
        }

        if disconnected {
            log::warn!("Search worker disconnected");
            self.response_rx = None;
            self.request_tx = None;
            self.in_flight = None;
        }

        changed
    }

    fn handle_response(&mut self, response: SearchResponse) -> bool {
        match response {
            SearchResponse::Results { request_id, stops } => {
                if request_id != self.request_id {
                    log::debug!("Discarding stale search results {}", request_id);
                    return false;
                }
                self.in_flight = None;
                self.show_results(stops);
                true
            }
            SearchResponse::Failed { request_id, error } => {
                log::warn!("Stop search {} failed: {}", request_id, error);
                if request_id == self.request_id {
                    self.in_flight = None;
                }
                false
            }
            SearchResponse::Cancelled { request_id } => {
                log::debug!("Stop search {} cancelled", request_id);
                false
            }
        }
    }

    /// Replace the list wholesale; an empty result hides the dropdown
    fn show_results(&mut self, stops: Vec<Stop>) {
        self.items = stops
            .into_iter()
            .map(|stop| SuggestionItem::new(stop.stop_name))
            .collect();
        self.visible = !self.items.is_empty();
        self.selected = None;
        self.scroll_offset = 0;
    }

    /// Hide and clear the dropdown
    pub fn hide(&mut self) {
        self.items.clear();
        self.visible = false;
        self.selected = None;
        self.scroll_offset = 0;
    }

    /// Close the dropdown without cancelling anything
    pub fn dismiss(&mut self) {
        self.set_selected(None);
        self.visible = false;
    }

    pub fn show_helper(&mut self, index: usize) -> bool {
        self.apply(index, ItemEvent::PointerEnter)
    }

    pub fn hide_helper(&mut self, index: usize) -> bool {
        self.apply(index, ItemEvent::PointerLeave)
    }

    /// Move the highlight, leaving the old row and entering the new one
    pub fn set_selected(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.items.len());
        if index == self.selected {
            return;
        }

        if let Some(old) = self.selected {
            self.hide_helper(old);
        }
        self.selected = index;
        if let Some(new) = index {
            self.show_helper(new);
            self.scroll_to(new);
        }
    }

    pub fn select_next(&mut self) {
        if !self.is_visible() {
            return;
        }
        let next = match self.selected {
            Some(i) if i + 1 < self.items.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.set_selected(Some(next));
    }

    pub fn select_previous(&mut self) {
        if !self.is_visible() {
            return;
        }
        let previous = match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.set_selected(Some(previous));
    }

    fn scroll_to(&mut self, index: usize) {
        let rows = self.window_rows();
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + rows {
            self.scroll_offset = index + 1 - rows;
        }
    }

    /// Copy an item's label through `write`
    ///
    /// On success the item shows its confirmation from `now`; on failure the
    /// error is logged and nothing visible changes.
    pub fn copy_with<F>(&mut self, index: usize, now: Instant, write: F) -> bool
    where
        F: FnOnce(&str) -> ClipboardResult,
    {
        let Some(item) = self.items.get(index) else {
            return false;
        };

        match write(&item.label) {
            Ok(()) => {
                log::debug!("Copied stop {:?}", item.label);
                self.apply(index, ItemEvent::CopySucceeded(now));
                true
            }
            Err(e) => {
                log::warn!("Failed to copy {:?}: {}", item.label, e);
                false
            }
        }
    }

    /// Expire copy confirmations; returns true if any item changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for item in &mut self.items {
            changed |= item.apply(ItemEvent::Tick(now));
        }
        changed
    }

    fn apply(&mut self, index: usize, event: ItemEvent) -> bool {
        self.items
            .get_mut(index)
            .is_some_and(|item| item.apply(event))
    }
}

#[cfg(test)]
#[path = "suggestion_state_tests.rs"]
mod suggestion_state_tests;
