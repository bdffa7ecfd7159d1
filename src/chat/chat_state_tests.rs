//! Tests for chat panel state

use std::sync::mpsc;

use proptest::prelude::*;
use ratatui::style::Modifier;

use super::*;
use crate::chat::{Role, TurnBody};
use crate::config::DEFAULT_FAILURE_MESSAGE;

const SESSION: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

struct Harness {
    chat: ChatState,
    session: SessionContext,
    request_rx: mpsc::Receiver<ChatRequest>,
    response_tx: mpsc::Sender<ChatResponse>,
}

fn harness() -> Harness {
    let mut chat = ChatState::new(&ChatConfig::default());
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    chat.set_channels(request_tx, response_rx);

    Harness {
        chat,
        session: SessionContext::with_id(SESSION),
        request_rx,
        response_tx,
    }
}

fn sent_request_id(h: &Harness) -> u64 {
    match h.request_rx.try_recv().expect("request sent") {
        ChatRequest::Ask { request_id, .. } => request_id,
    }
}

// =========================================================================
// Submission
// =========================================================================

#[test]
fn test_empty_submit_is_noop() {
    let mut h = harness();

    assert!(!h.chat.submit_message("", &h.session));

    assert!(h.chat.transcript().is_empty());
    assert!(!h.chat.is_pending());
    assert!(h.chat.input.is_enabled());
    assert!(h.request_rx.try_recv().is_err());
}

#[test]
fn test_whitespace_submit_is_noop() {
    let mut h = harness();
    h.chat.input.set_text("   \t ");

    assert!(!h.chat.submit_input(&h.session));

    assert!(h.chat.transcript().is_empty());
    assert_eq!(h.chat.pending(), PendingState::Idle);
    assert_eq!(h.chat.input.text(), "   \t ");
}

#[test]
fn test_submit_appends_user_turn_before_response() {
    let mut h = harness();
    h.chat.input.set_text("Hello");

    assert!(h.chat.submit_input(&h.session));

    assert_eq!(h.chat.transcript(), &[ChatTurn::user("Hello")]);
    assert!(h.chat.is_pending());
    assert!(!h.chat.input.is_enabled());
    assert!(!h.chat.send_enabled());
    assert_eq!(h.chat.input.text(), "");
}

#[test]
fn test_submit_sends_query_with_session_id() {
    let mut h = harness();

    h.chat.submit_message("Je veux aller à Genève", &h.session);

    match h.request_rx.try_recv().unwrap() {
        ChatRequest::Ask {
            query,
            session_id,
            request_id,
        } => {
            assert_eq!(query, "Je veux aller à Genève");
            assert_eq!(session_id.as_str(), SESSION);
            assert_eq!(request_id, 1);
        }
    }
}

#[test]
fn test_text_is_sent_untrimmed() {
    let mut h = harness();

    h.chat.submit_message("  Lausanne  ", &h.session);

    let ChatRequest::Ask { query, .. } = h.request_rx.try_recv().unwrap();
    assert_eq!(query, "  Lausanne  ");
}

#[test]
fn test_submit_while_pending_is_rejected() {
    let mut h = harness();
    h.chat.submit_message("first", &h.session);

    assert!(!h.chat.submit_message("second", &h.session));

    assert_eq!(h.chat.transcript().len(), 1);
    sent_request_id(&h);
    assert!(h.request_rx.try_recv().is_err());
}

#[test]
fn test_session_id_is_same_for_every_request() {
    let mut h = harness();

    for text in ["one", "two", "three"] {
        h.chat.submit_message(text, &h.session);
        let ChatRequest::Ask {
            session_id,
            request_id,
            ..
        } = h.request_rx.try_recv().unwrap();
        assert_eq!(session_id.as_str(), SESSION);
        h.response_tx
            .send(ChatResponse::Answer {
                request_id,
                answer: "ok".to_string(),
            })
            .unwrap();
        h.chat.poll_response();
    }

    assert_eq!(h.chat.transcript().len(), 6);
}

// =========================================================================
// Settling
// =========================================================================

#[test]
fn test_answer_appends_rendered_bot_turn_and_unlocks() {
    let mut h = harness();
    h.chat.submit_message("Hello", &h.session);
    let request_id = sent_request_id(&h);

    h.response_tx
        .send(ChatResponse::Answer {
            request_id,
            answer: "**Hi!**".to_string(),
        })
        .unwrap();

    assert!(h.chat.poll_response());

    let transcript = h.chat.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1].role, Role::Bot);
    assert_eq!(transcript[1].plain_text(), "Hi!");
    match &transcript[1].body {
        TurnBody::Rich { source, text } => {
            assert_eq!(source, "**Hi!**");
            assert!(text.lines[0].spans[0]
                .style
                .add_modifier
                .contains(Modifier::BOLD));
        }
        other => panic!("Expected rich body, got {:?}", other),
    }

    assert!(!h.chat.is_pending());
    assert!(h.chat.input.is_enabled());
    assert!(h.chat.send_enabled());
    assert!(h.chat.take_focus_request());
}

#[test]
fn test_failure_appends_fallback_message() {
    let mut h = harness();
    h.chat.submit_message("Hello", &h.session);
    let request_id = sent_request_id(&h);

    h.response_tx
        .send(ChatResponse::Failed {
            request_id,
            error: BackendError::Network("connection refused".to_string()),
        })
        .unwrap();
    h.chat.poll_response();

    let transcript = h.chat.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1], ChatTurn::bot_notice(DEFAULT_FAILURE_MESSAGE));
    assert!(!h.chat.is_pending());
    assert!(h.chat.input.is_enabled());
}

#[test]
fn test_parse_failure_looks_like_network_failure() {
    let mut network = harness();
    let mut parse = harness();

    for (h, error) in [
        (&mut network, BackendError::Network("timeout".to_string())),
        (&mut parse, BackendError::Parse("expected value".to_string())),
    ] {
        h.chat.submit_message("Hello", &h.session);
        let request_id = sent_request_id(h);
        h.response_tx
            .send(ChatResponse::Failed { request_id, error })
            .unwrap();
        h.chat.poll_response();
    }

    assert_eq!(network.chat.transcript(), parse.chat.transcript());
}

#[test]
fn test_custom_failure_message() {
    let config = ChatConfig {
        visible: true,
        failure_message: "Something went wrong.".to_string(),
    };
    let mut chat = ChatState::new(&config);
    let session = SessionContext::with_id(SESSION);

    chat.submit_message("Hello", &session);

    assert_eq!(
        chat.transcript()[1],
        ChatTurn::bot_notice("Something went wrong.")
    );
}

#[test]
fn test_stale_response_is_discarded() {
    let mut h = harness();
    h.chat.submit_message("Hello", &h.session);
    let request_id = sent_request_id(&h);

    h.response_tx
        .send(ChatResponse::Answer {
            request_id: request_id + 10,
            answer: "not for you".to_string(),
        })
        .unwrap();

    assert!(!h.chat.poll_response());
    assert_eq!(h.chat.transcript().len(), 1);
    assert!(h.chat.is_pending());
}

#[test]
fn test_duplicate_response_is_discarded() {
    let mut h = harness();
    h.chat.submit_message("Hello", &h.session);
    let request_id = sent_request_id(&h);

    for _ in 0..2 {
        h.response_tx
            .send(ChatResponse::Answer {
                request_id,
                answer: "once".to_string(),
            })
            .unwrap();
    }
    h.chat.poll_response();

    assert_eq!(h.chat.transcript().len(), 2);
}

#[test]
fn test_without_worker_settles_immediately_with_failure() {
    let mut chat = ChatState::new(&ChatConfig::default());
    let session = SessionContext::with_id(SESSION);

    assert!(chat.submit_message("Hello", &session));

    assert_eq!(chat.transcript().len(), 2);
    assert_eq!(chat.transcript()[1], ChatTurn::bot_notice(DEFAULT_FAILURE_MESSAGE));
    assert!(!chat.is_pending());
    assert!(chat.input.is_enabled());
}

#[test]
fn test_worker_disconnect_while_pending_settles() {
    let mut h = harness();
    h.chat.submit_message("Hello", &h.session);
    drop(h.response_tx);

    assert!(h.chat.poll_response());

    assert_eq!(h.chat.transcript().len(), 2);
    assert!(!h.chat.is_pending());
    assert!(h.chat.input.is_enabled());
}

#[test]
fn test_poll_without_responses_changes_nothing() {
    let mut h = harness();
    assert!(!h.chat.poll_response());
    assert!(!h.chat.take_focus_request());
}

#[test]
fn test_submit_requests_follow_latest() {
    let mut h = harness();
    assert!(!h.chat.take_follow_latest());

    h.chat.submit_message("Hello", &h.session);

    assert!(h.chat.take_follow_latest());
    assert!(!h.chat.take_follow_latest());
}

// =========================================================================
// Visibility
// =========================================================================

#[test]
fn test_toggle_visibility_flips_each_time() {
    let mut h = harness();
    assert!(h.chat.visible);

    h.chat.toggle_visibility();
    assert!(!h.chat.visible);

    h.chat.toggle_visibility();
    assert!(h.chat.visible);
}

#[test]
fn test_hidden_on_start_when_configured() {
    let config = ChatConfig {
        visible: false,
        ..ChatConfig::default()
    };
    assert!(!ChatState::new(&config).visible);
}

// For any non-blank message and either outcome, the transcript grows by
// exactly two turns: the user's, then the bot's.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_each_submit_adds_two_turns(
        messages in prop::collection::vec(("[a-zA-Zéè ]{0,8}[a-zA-Z]", prop::bool::ANY), 1..5),
    ) {
        let mut h = harness();

        for (i, (text, succeed)) in messages.iter().enumerate() {
            let before = h.chat.transcript().len();
            prop_assert!(h.chat.submit_message(text, &h.session));
            prop_assert_eq!(h.chat.transcript().len(), before + 1);
            prop_assert_eq!(&h.chat.transcript()[before], &ChatTurn::user(text));

            let request_id = sent_request_id(&h);
            prop_assert_eq!(request_id, i as u64 + 1);
            let response = if *succeed {
                ChatResponse::Answer { request_id, answer: "ok".to_string() }
            } else {
                ChatResponse::Failed { request_id, error: BackendError::Parse("bad".to_string()) }
            };
            h.response_tx.send(response).unwrap();
            h.chat.poll_response();

            prop_assert_eq!(h.chat.transcript().len(), before + 2);
            prop_assert_eq!(h.chat.transcript()[before + 1].role, Role::Bot);
            prop_assert!(!h.chat.is_pending());
        }
    }

    #[test]
    fn prop_blank_submit_changes_nothing(text in "[ \t]{0,10}") {
        let mut h = harness();
        prop_assert!(!h.chat.submit_message(&text, &h.session));
        prop_assert!(h.chat.transcript().is_empty());
        prop_assert!(!h.chat.is_pending());
    }
}
