//! Search Worker Thread
//!
//! Owns a tokio runtime and runs each stop search as its own task, so a slow
//! response never holds up a newer query. Answers can therefore arrive out of
//! order; the dropdown state filters them by request ID.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::suggestion_state::{SearchRequest, SearchResponse};
use crate::backend::{BackendClient, BackendError};
use crate::error::StopChatError;

/// Spawn the search worker thread
pub fn spawn_worker(
    client: BackendClient,
    request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) -> Result<(), StopChatError> {
    std::thread::Builder::new()
        .name("search-worker".to_string())
        .spawn(move || worker_loop(client, request_rx, response_tx))
        .map(|_| ())
        .map_err(|_| StopChatError::WorkerSpawn("search"))
}

/// Main worker loop - dispatches searches until the channel is closed
fn worker_loop(
    client: BackendClient,
    mut request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::warn!("Search worker could not start async runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async move {
        while let Some(request) = request_rx.recv().await {
            match request {
                SearchRequest::Query {
                    query,
                    request_id,
                    cancel_token,
                } => {
                    let client = client.clone();
                    let response_tx = response_tx.clone();
                    tokio::spawn(async move {
                        let response = run_search(&client, &query, request_id, &cancel_token).await;
                        let _ = response_tx.send(response);
                    });
                }
            }
        }
    });

    log::debug!("Search worker thread shutting down");
}

/// Run one search and turn its outcome into a response
async fn run_search(
    client: &BackendClient,
    query: &str,
    request_id: u64,
    cancel_token: &CancellationToken,
) -> SearchResponse {
    match client.search_stops(query, cancel_token).await {
        Ok(stops) => {
            log::debug!("Search {} returned {} stops", request_id, stops.len());
            SearchResponse::Results { request_id, stops }
        }
        Err(BackendError::Cancelled) => SearchResponse::Cancelled { request_id },
        Err(error) => SearchResponse::Failed { request_id, error },
    }
}

#[cfg(test)]
#[path = "suggestion_worker_tests.rs"]
mod suggestion_worker_tests;
