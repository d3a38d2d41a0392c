#![cfg(feature = "test-utils")]

mod support;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::support::tracing_init;
use droptune::search::{DebounceDirective, SearchActions, SearchInput, SEARCH_DEBOUNCE};
use droptune::test_support::RecordingActions;

const SPOTIFY_URI: &str = "spotify:track:4uLU6hMCjMI75M1A2tKUQC";

/// Drives a [`SearchInput`] the way the widget does: every edit cancels the
/// armed dispatch outright, and a `Restart` directive arms a fresh delayed
/// task for the full debounce delay.
struct DebounceHarness {
    input: SearchInput,
    actions: Arc<RecordingActions>,
    pending: Option<JoinHandle<()>>,
}

impl DebounceHarness {
    fn new() -> Self {
        Self {
            input: SearchInput::new(),
            actions: Arc::new(RecordingActions::new()),
            pending: None,
        }
    }

    fn type_text(&mut self, text: &str) {
        let directive = self.input.set_text(text.to_string(), self.actions.as_ref());

        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        if let DebounceDirective::Restart { query } = directive {
            let actions = Arc::clone(&self.actions);
            self.pending = Some(tokio::spawn(async move {
                tokio::time::sleep(SEARCH_DEBOUNCE).await;
                actions.search(&query);
            }));
        }
    }

    fn searches(&self) -> Vec<String> {
        self.actions.searches()
    }
}

#[tokio::test]
async fn test_second_keystroke_cancels_first_dispatch() {
    tracing_init();
    let mut harness = DebounceHarness::new();

    harness.type_text("ab");
    tokio::time::sleep(Duration::from_millis(250)).await;
    harness.type_text("abc");

    // We are now past the point where the first dispatch would have fired.
    // Only the cancelled task could have produced a search this early.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(harness.searches().is_empty());

    // The rearmed dispatch fires a full delay after the second keystroke.
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(harness.searches(), vec!["abc".to_string()]);
}

#[tokio::test]
async fn test_rapid_typing_dispatches_only_final_query() {
    tracing_init();
    let mut harness = DebounceHarness::new();

    harness.type_text("q");
    tokio::time::sleep(Duration::from_millis(100)).await;
    harness.type_text("qu");
    tokio::time::sleep(Duration::from_millis(100)).await;
    harness.type_text("queen");

    tokio::time::sleep(Duration::from_millis(800)).await;
    assert_eq!(harness.searches(), vec!["queen".to_string()]);
}

#[tokio::test]
async fn test_link_paste_cancels_armed_dispatch() {
    tracing_init();
    let mut harness = DebounceHarness::new();

    harness.type_text("queen");
    tokio::time::sleep(Duration::from_millis(200)).await;
    harness.type_text(SPOTIFY_URI);

    // The query must never fire once the text turned into a link.
    tokio::time::sleep(Duration::from_millis(700)).await;
    assert!(harness.searches().is_empty());

    // Typing plain text again arms a fresh dispatch as usual.
    harness.type_text("fresh query");
    tokio::time::sleep(Duration::from_millis(700)).await;
    assert_eq!(harness.searches(), vec!["fresh query".to_string()]);
}

#[tokio::test]
async fn test_emptying_field_cancels_armed_dispatch() {
    tracing_init();
    let mut harness = DebounceHarness::new();

    harness.type_text("nevermind");
    tokio::time::sleep(Duration::from_millis(200)).await;
    harness.type_text("");

    tokio::time::sleep(Duration::from_millis(700)).await;
    assert!(harness.searches().is_empty());
}

#[tokio::test]
async fn test_undisturbed_pause_fires_exactly_once() {
    tracing_init();
    let mut harness = DebounceHarness::new();

    harness.type_text("bohemian rhapsody");

    tokio::time::sleep(Duration::from_millis(700)).await;
    assert_eq!(harness.searches(), vec!["bohemian rhapsody".to_string()]);

    // No second dispatch shows up later.
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(harness.searches().len(), 1);
}
