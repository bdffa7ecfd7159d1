//! System clipboard backend
//!
//! Provides clipboard access via the operating system's native clipboard API
//! using the arboard crate.

use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

/// Copy text to system clipboard using arboard
///
/// Fails with `SystemUnavailable` in headless environments or when no display
/// server is running.
pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod system_tests;
