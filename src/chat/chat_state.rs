//! Chat panel state
//!
//! Owns the transcript, the message input and the pending-request lifecycle,
//! plus the channel handles for the chat worker thread.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::pending::PendingState;
use super::turn::ChatTurn;
use crate::backend::BackendError;
use crate::config::ChatConfig;
use crate::input::InputField;
use crate::scroll::ScrollState;
use crate::session::{SessionContext, SessionId};

/// Request messages sent to the chat worker thread
#[derive(Debug)]
pub enum ChatRequest {
    Ask {
        query: String,
        session_id: SessionId,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
}

/// Response messages received from the chat worker thread
///
/// The worker sends exactly one of these per `ChatRequest::Ask`.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatResponse {
    Answer { request_id: u64, answer: String },
    Failed { request_id: u64, error: BackendError },
}

/// Chat panel state
pub struct ChatState {
    /// Whether the chat panel is shown
    pub visible: bool,
    /// Message input; disabled while a request is pending
    pub input: InputField,
    /// Transcript scroll position
    pub scroll: ScrollState,
    transcript: Vec<ChatTurn>,
    pending: PendingState,
    /// Last issued request ID
    request_id: u64,
    failure_message: String,
    /// Set when the next render should bring the latest turn into view
    follow_latest: bool,
    /// Set when the input should get focus back
    focus_requested: bool,
    request_tx: Option<Sender<ChatRequest>>,
    response_rx: Option<Receiver<ChatResponse>>,
}

impl ChatState {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            visible: config.visible,
            input: InputField::new(),
            scroll: ScrollState::new(),
            transcript: Vec::new(),
            pending: PendingState::Idle,
            request_id: 0,
            failure_message: config.failure_message.clone(),
            follow_latest: false,
            focus_requested: false,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(&mut self, request_tx: Sender<ChatRequest>, response_rx: Receiver<ChatResponse>) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    pub fn pending(&self) -> PendingState {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }

    /// Whether the send affordance accepts activation
    pub fn send_enabled(&self) -> bool {
        !self.is_pending()
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Send whatever is in the input field
    pub fn submit_input(&mut self, session: &SessionContext) -> bool {
        let text = self.input.text().to_string();
        self.submit_message(&text, session)
    }

    /// Submit a user message
    ///
    /// Blank text is ignored. Otherwise the input is locked, the user turn is
    /// appended before the request is dispatched, and the field is cleared.
    /// Returns false when nothing was submitted, including while another
    /// request is still pending.
    pub fn submit_message(&mut self, text: &str, session: &SessionContext) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        let request_id = self.request_id.wrapping_add(1);
        if !self.pending.begin(request_id) {
            log::debug!("Ignoring submit while request {:?} is pending", self.pending.request_id());
            return false;
        }
        self.request_id = request_id;

        self.input.set_enabled(false);
        self.transcript.push(ChatTurn::user(text));
        self.input.clear();
        self.follow_latest = true;

        let request = ChatRequest::Ask {
            query: text.to_string(),
            session_id: session.session_id().clone(),
            request_id,
        };

        let sent = match &self.request_tx {
            Some(tx) => tx.send(request).is_ok(),
            None => false,
        };

        if sent {
            log::debug!("Sent chat request {}", request_id);
        } else {
            self.settle(
                request_id,
                Err(BackendError::Network("chat worker unavailable".to_string())),
            );
        }

        true
    }

    /// Drain worker responses
    ///
    /// Returns true if the transcript changed.
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
            log::warn!("Chat worker disconnected");
            self.response_rx = None;
            self.request_tx = None;
            if let Some(request_id) = self.pending.request_id() {
                changed |= self.settle(
                    request_id,
                    Err(BackendError::Network("chat worker disconnected".to_string())),
                );
            }
        }

        changed
    }

    fn handle_response(&mut self, response: ChatResponse) -> bool {
        match response {
            ChatResponse::Answer { request_id, answer } => self.settle(request_id, Ok(answer)),
            ChatResponse::Failed { request_id, error } => self.settle(request_id, Err(error)),
        }
    }

    /// The only way out of `Pending`
    ///
    /// Appends the bot turn for the outcome, then unlocks and refocuses the
    /// input. Responses for any other request are dropped.
    fn settle(&mut self, request_id: u64, outcome: Result<String, BackendError>) -> bool {
        if self.pending.request_id() != Some(request_id) {
            log::debug!("Discarding stale chat response {}", request_id);
            return false;
        }

        let turn = match outcome {
            Ok(answer) => ChatTurn::bot_answer(&answer),
            Err(error) => {
                log::warn!("Chat request {} failed: {}", request_id, error);
                ChatTurn::bot_notice(&self.failure_message)
            }
        };
        self.transcript.push(turn);

        self.pending.settle(request_id);
        self.input.set_enabled(true);
        self.focus_requested = true;
        self.follow_latest = true;
        true
    }

    /// Consume a pending request to focus the input
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Consume a pending request to scroll to the latest turn
    pub fn take_follow_latest(&mut self) -> bool {
        std::mem::take(&mut self.follow_latest)
    }
}

#[cfg(test)]
#[path = "chat_state_tests.rs"]
mod chat_state_tests;
