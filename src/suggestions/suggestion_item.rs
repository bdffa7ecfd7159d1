//! Per-item hover and copy-feedback state

use std::time::{Duration, Instant};

/// How long "✓ Copié" stays visible after a copy
pub const COPY_FEEDBACK: Duration = Duration::from_secs(3);

/// Whether the pointer (or keyboard selection) is on the item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering,
}

/// Copy confirmation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    Copied {
        since: Instant,
    },
}

/// Inputs to the item state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEvent {
    PointerEnter,
    PointerLeave,
    CopySucceeded(Instant),
    Tick(Instant),
}

/// One stop in the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub label: String,
    hover: HoverState,
    copy: CopyState,
}

impl SuggestionItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hover: HoverState::Idle,
            copy: CopyState::Idle,
        }
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }

    pub fn copy_state(&self) -> CopyState {
        self.copy
    }

    pub fn is_copied(&self) -> bool {
        matches!(self.copy, CopyState::Copied { .. })
    }

    pub fn shows_copy_icon(&self) -> bool {
        !self.is_copied()
    }

    pub fn shows_helper(&self) -> bool {
        self.hover == HoverState::Hovering && !self.is_copied()
    }

    /// Apply one event; returns true if anything visible changed
    ///
    /// Hover and copy are independent, except that a successful copy hides
    /// the helper until the pointer enters again. A second copy while the
    /// confirmation is showing restarts its window.
    pub fn apply(&mut self, event: ItemEvent) -> bool {
        let before = (self.hover, self.copy);

        match event {
            ItemEvent::PointerEnter => self.hover = HoverState::Hovering,
            ItemEvent::PointerLeave => self.hover = HoverState::Idle,
            ItemEvent::CopySucceeded(now) => {
                self.hover = HoverState::Idle;
                self.copy = CopyState::Copied { since: now };
            }
            ItemEvent::Tick(now) => {
                if let CopyState::Copied { since } = self.copy {
                    if now.saturating_duration_since(since) >= COPY_FEEDBACK {
                        self.copy = CopyState::Idle;
                    }
                }
            }
        }

        before != (self.hover, self.copy)
    }
}
