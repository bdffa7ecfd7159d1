//! Chat Worker Thread
//!
//! Runs `POST /ask` calls on a background thread so the UI stays responsive.
//! Requests are handled one at a time; every request gets exactly one
//! response, even if the handler unwinds.

use std::sync::mpsc::{Receiver, Sender};

use super::chat_state::{ChatRequest, ChatResponse};
use crate::backend::{BackendClient, BackendError};
use crate::error::StopChatError;

/// Spawn the chat worker thread
pub fn spawn_worker(
    client: BackendClient,
    request_rx: Receiver<ChatRequest>,
    response_tx: Sender<ChatResponse>,
) -> Result<(), StopChatError> {
    std::thread::Builder::new()
        .name("chat-worker".to_string())
        .spawn(move || worker_loop(client, request_rx, response_tx))
        .map(|_| ())
        .map_err(|_| StopChatError::WorkerSpawn("chat"))
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(client: BackendClient, request_rx: Receiver<ChatRequest>, response_tx: Sender<ChatResponse>) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => Some(rt),
        Err(e) => {
            log::warn!("Chat worker could not start async runtime: {}", e);
            None
        }
    };

    while let Ok(request) = request_rx.recv() {
        match request {
            ChatRequest::Ask {
                query,
                session_id,
                request_id,
            } => {
                let guard = SettleGuard::new(request_id, &response_tx);
                let Some(rt) = &runtime else {
                    guard.settle_err(BackendError::Network("async runtime unavailable".to_string()));
                    continue;
                };

                match rt.block_on(client.ask(&query, &session_id)) {
                    Ok(answer) => guard.settle(ChatResponse::Answer { request_id, answer }),
                    Err(error) => guard.settle_err(error),
                }
            }
        }
    }

    log::debug!("Chat worker thread shutting down");
}

/// Guarantees one response per request
///
/// Dropping an unsettled guard (early return or panic) reports a failure, so
/// the UI never stays stuck in its pending state.
struct SettleGuard<'a> {
    request_id: u64,
    response_tx: &'a Sender<ChatResponse>,
    settled: bool,
}

impl<'a> SettleGuard<'a> {
    fn new(request_id: u64, response_tx: &'a Sender<ChatResponse>) -> Self {
        Self {
            request_id,
            response_tx,
            settled: false,
        }
    }

    fn settle(mut self, response: ChatResponse) {
        self.settled = true;
        let _ = self.response_tx.send(response);
    }

    fn settle_err(self, error: BackendError) {
        let request_id = self.request_id;
        self.settle(ChatResponse::Failed { request_id, error });
    }
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            let _ = self.response_tx.send(ChatResponse::Failed {
                request_id: self.request_id,
                error: BackendError::Network("request aborted".to_string()),
            });
        }
    }
}

#[cfg(test)]
#[path = "chat_worker_tests.rs"]
mod chat_worker_tests;
