//! Assistant backend access
//!
//! HTTP client for the two endpoints the client talks to: `POST /ask` for chat
//! answers and `GET /search_stops/` for stop-name suggestions.

mod client;
mod types;

use thiserror::Error;

pub use client::BackendClient;
pub use types::{AskRequest, AskResponse, Stop};

/// Errors that can occur while talking to the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Transport failure: connection refused, timeout, TLS, ...
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Body was not the JSON shape we expect
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request was superseded before it completed
    #[error("Request cancelled")]
    Cancelled,
}
