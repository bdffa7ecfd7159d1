//! Terminal client for a public transport assistant
//!
//! A chat panel talking to the assistant's `POST /ask` endpoint, next to a
//! stop-name search box fed by `GET /search_stops/`.

pub mod app;
pub mod backend;
pub mod chat;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod markdown;
pub mod scroll;
pub mod session;
pub mod suggestions;
pub mod widgets;
