//! Clipboard access
//!
//! Copies text through the OS clipboard (arboard) or an OSC 52 escape
//! sequence, selected by the `[clipboard] backend` setting.

mod backend;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};
