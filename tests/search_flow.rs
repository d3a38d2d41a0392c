#![cfg(feature = "test-utils")]

mod support;
use std::collections::HashSet;

use crate::support::tracing_init;
use droptune::models::LinkSource;
use droptune::search::{DebounceDirective, SearchInput};
use droptune::test_support::{DispatchedAction, RecordingActions};

const SPOTIFY_URI: &str = "spotify:track:4uLU6hMCjMI75M1A2tKUQC";
const ITUNES_URL: &str = "https://itun.es/us/JHvzb?i=528436018";

fn flagged(id: &str) -> HashSet<String> {
    HashSet::from([id.to_string()])
}

#[test]
fn test_paste_submit_and_feed_growth_round_trip() {
    tracing_init();

    let actions = RecordingActions::new();
    let mut input = SearchInput::new();

    // Widget mounts over an empty feed.
    assert!(!input.observe_links_len(0));

    // Paste a Spotify URI: any brewing search stops, results clear.
    let directive = input.set_text(SPOTIFY_URI.to_string(), &actions);
    assert_eq!(directive, DebounceDirective::Cancel);
    assert_eq!(
        actions.take(),
        vec![
            DispatchedAction::SearchLoading(false),
            DispatchedAction::ClearResults,
        ]
    );

    // Submit fires the create request for the detected track.
    input.submit(&HashSet::new(), &actions);
    let created = actions.created_links();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].source, LinkSource::Spotify);
    assert_eq!(created[0].source_id, "4uLU6hMCjMI75M1A2tKUQC");

    // The feed grows when the create lands and the field resets itself.
    assert!(input.observe_links_len(1));
    assert_eq!(input.text(), "");
    assert!(input.detected_link().is_none());
}

#[test]
fn test_itunes_paste_creates_itunes_link() {
    tracing_init();

    let actions = RecordingActions::new();
    let mut input = SearchInput::new();

    input.set_text(ITUNES_URL.to_string(), &actions);
    let link = input.detected_link().expect("itunes url should classify");
    assert_eq!(link.source, LinkSource::Itunes);
    assert_eq!(link.id, "528436018");

    input.submit(&HashSet::new(), &actions);
    let created = actions.created_links();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].source, LinkSource::Itunes);
    assert_eq!(created[0].source_id, "528436018");
}

#[test]
fn test_typed_query_focus_blur_lifecycle() {
    tracing_init();

    let actions = RecordingActions::new();
    let mut input = SearchInput::new();

    // Typing clears any stale create error and raises the loading flag.
    let directive = input.set_text("daft punk".to_string(), &actions);
    assert_eq!(
        directive,
        DebounceDirective::Restart {
            query: "daft punk".to_string()
        }
    );
    assert!(input.results_visible());
    assert_eq!(
        actions.take(),
        vec![
            DispatchedAction::CreateLinkError(false),
            DispatchedAction::SearchLoading(true),
        ]
    );

    // Leaving the field drops the dropdown.
    input.blur(&actions);
    assert_eq!(actions.take(), vec![DispatchedAction::ClearResults]);

    // Coming back re-runs the query immediately, no debounce.
    input.focus(&actions);
    assert_eq!(
        actions.take(),
        vec![
            DispatchedAction::CreateLinkError(false),
            DispatchedAction::Search("daft punk".to_string()),
        ]
    );
}

#[test]
fn test_invalid_link_submission_falls_back_to_search() {
    tracing_init();

    let actions = RecordingActions::new();
    let mut input = SearchInput::new();

    input.set_text(SPOTIFY_URI.to_string(), &actions);
    actions.take();

    let invalid = flagged("4uLU6hMCjMI75M1A2tKUQC");
    assert!(input.is_invalid(&invalid));

    // The flagged id must not be re-submitted; the raw text goes out as a
    // query instead.
    input.submit(&invalid, &actions);
    assert!(actions.created_links().is_empty());
    assert_eq!(actions.searches(), vec![SPOTIFY_URI.to_string()]);

    // Editing to a different track clears the invalid state.
    input.set_text("spotify:track:0ther1d".to_string(), &actions);
    assert!(!input.is_invalid(&invalid));
}

#[test]
fn test_link_paste_closes_open_search_window() {
    tracing_init();

    let actions = RecordingActions::new();
    let mut input = SearchInput::new();
    let results = ["row"];

    input.set_text("queen bohemian".to_string(), &actions);
    assert_eq!(input.visible_results(&results), &results);
    actions.take();

    input.set_text(SPOTIFY_URI.to_string(), &actions);
    assert!(input.visible_results(&results).is_empty());
    assert_eq!(
        actions.take(),
        vec![
            DispatchedAction::SearchLoading(false),
            DispatchedAction::ClearResults,
        ]
    );
}

#[test]
fn test_clearing_and_backspace_on_empty_field() {
    tracing_init();

    let actions = RecordingActions::new();
    let mut input = SearchInput::new();

    input.set_text("nirvana".to_string(), &actions);
    actions.take();

    // Deleting everything closes the window and clears results.
    let directive = input.set_text(String::new(), &actions);
    assert_eq!(directive, DebounceDirective::Cancel);
    assert!(!input.results_visible());
    assert_eq!(
        actions.take(),
        vec![
            DispatchedAction::SearchLoading(false),
            DispatchedAction::ClearResults,
        ]
    );

    // Backspace on the already-empty field clears lingering results too.
    input.backspace(&actions);
    assert_eq!(actions.take(), vec![DispatchedAction::ClearResults]);
}

#[test]
fn test_feed_growth_without_pending_link_is_ignored() {
    tracing_init();

    let actions = RecordingActions::new();
    let mut input = SearchInput::new();

    assert!(!input.observe_links_len(3));
    input.set_text("some song".to_string(), &actions);

    // Another client shared a link; our typed query must survive.
    assert!(!input.observe_links_len(4));
    assert_eq!(input.text(), "some song");
    assert!(input.results_visible());
}
