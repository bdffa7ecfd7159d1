//! Pending-request state of the chat panel

/// Whether a chat request is outstanding
///
/// `Idle -> Pending -> Idle`. There is no cancellation edge: a pending request
/// only ends when it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingState {
    #[default]
    Idle,
    Pending { request_id: u64 },
}

impl PendingState {
    pub fn is_pending(&self) -> bool {
        matches!(self, PendingState::Pending { .. })
    }

    pub fn request_id(&self) -> Option<u64> {
        match self {
            PendingState::Pending { request_id } => Some(*request_id),
            PendingState::Idle => None,
        }
    }

    /// Enter `Pending`; refused while another request is outstanding
    pub fn begin(&mut self, request_id: u64) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = PendingState::Pending { request_id };
        true
    }

    /// Return to `Idle` if `request_id` is the outstanding request
    pub fn settle(&mut self, request_id: u64) -> bool {
        if self.request_id() != Some(request_id) {
            return false;
        }
        *self = PendingState::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state = PendingState::default();
        assert!(!state.is_pending());
        assert_eq!(state.request_id(), None);
    }

    #[test]
    fn test_begin_then_settle() {
        let mut state = PendingState::Idle;
        assert!(state.begin(7));
        assert_eq!(state, PendingState::Pending { request_id: 7 });
        assert!(state.settle(7));
        assert_eq!(state, PendingState::Idle);
    }

    #[test]
    fn test_begin_refused_while_pending() {
        let mut state = PendingState::Idle;
        assert!(state.begin(1));
        assert!(!state.begin(2));
        assert_eq!(state.request_id(), Some(1));
    }

    #[test]
    fn test_settle_ignores_other_request() {
        let mut state = PendingState::Idle;
        state.begin(3);
        assert!(!state.settle(2));
        assert!(state.is_pending());
    }

    #[test]
    fn test_settle_when_idle_is_noop() {
        let mut state = PendingState::Idle;
        assert!(!state.settle(1));
        assert_eq!(state, PendingState::Idle);
    }
}
