// Test support utilities for both unit and integration tests

use crate::models::NewLink;
use crate::search::SearchActions;
use std::sync::Mutex;

/// One command dispatched by the search widget.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchedAction {
    Search(String),
    ClearResults,
    CreateLink(NewLink),
    SearchLoading(bool),
    CreateLinkError(bool),
}

/// Recording command sink for testing
///
/// Captures everything the search widget dispatches instead of driving a
/// real store. Tests assert on the exact dispatch sequence.
pub struct RecordingActions {
    log: Mutex<Vec<DispatchedAction>>,
}

impl Default for RecordingActions {
    fn default() -> Self {
        RecordingActions {
            log: Mutex::new(Vec::new()),
        }
    }
}

impl RecordingActions {
    /// Create a new recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded dispatches.
    pub fn take(&self) -> Vec<DispatchedAction> {
        std::mem::take(&mut *self.log.lock().unwrap())
    }

    /// Queries dispatched through `search`, oldest first.
    pub fn searches(&self) -> Vec<String> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter_map(|action| match action {
                DispatchedAction::Search(query) => Some(query.clone()),
                _ => None,
            })
            .collect()
    }

    /// Requests dispatched through `create_link`, oldest first.
    pub fn created_links(&self) -> Vec<NewLink> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter_map(|action| match action {
                DispatchedAction::CreateLink(request) => Some(request.clone()),
                _ => None,
            })
            .collect()
    }
}

impl SearchActions for RecordingActions {
    fn search(&self, query: &str) {
        self.log
            .lock()
            .unwrap()
            .push(DispatchedAction::Search(query.to_string()));
    }

    fn clear_results(&self) {
        self.log.lock().unwrap().push(DispatchedAction::ClearResults);
    }

    fn create_link(&self, request: NewLink) {
        self.log
            .lock()
            .unwrap()
            .push(DispatchedAction::CreateLink(request));
    }

    fn set_search_loading(&self, loading: bool) {
        self.log
            .lock()
            .unwrap()
            .push(DispatchedAction::SearchLoading(loading));
    }

    fn set_create_link_error(&self, failed: bool) {
        self.log
            .lock()
            .unwrap()
            .push(DispatchedAction::CreateLinkError(failed));
    }
}
