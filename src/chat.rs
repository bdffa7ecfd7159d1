//! Chat panel
//!
//! Sends user messages to the assistant backend and keeps the conversation
//! transcript. At most one request is in flight; the input stays locked until
//! it settles.

pub mod chat_events;
pub mod chat_render;
mod chat_state;
mod chat_worker;
mod pending;
mod turn;

pub use chat_state::{ChatRequest, ChatResponse, ChatState};
pub use chat_worker::spawn_worker;
pub use pending::PendingState;
pub use turn::{ChatTurn, Role, TurnBody};
