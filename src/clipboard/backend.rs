//! Clipboard backend selection and error types

use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

/// Result type for clipboard operations
pub type ClipboardResult = Result<(), ClipboardError>;

/// Errors that can occur during clipboard operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// System clipboard is not available
    #[error("system clipboard unavailable")]
    SystemUnavailable,
    /// Error writing to clipboard
    #[error("failed to write to clipboard")]
    WriteError,
}

/// Copy text to clipboard using the specified backend
///
/// # Backend Selection
/// - `System`: Uses only the OS clipboard API (via arboard)
/// - `Osc52`: Uses only OSC 52 escape sequences
/// - `Auto`: Tries system clipboard first, falls back to OSC 52 if unavailable
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|e| {
            log::debug!("System clipboard failed ({}), falling back to OSC 52", e);
            osc52::copy(text)
        }),
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;
