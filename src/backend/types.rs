//! Wire types for the assistant backend

use serde::{Deserialize, Serialize};

/// Body of `POST /ask`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskRequest<'a> {
    pub query: &'a str,
    pub session_id: &'a str,
}

/// Successful `POST /ask` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AskResponse {
    pub gpt_answer: String,
}

/// One entry of the `GET /search_stops/` response
///
/// The backend may add fields; only the display name is read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stop {
    pub stop_name: String,
}
