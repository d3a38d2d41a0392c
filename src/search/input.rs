use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::models::NewLink;
use crate::search::actions::SearchActions;
use crate::search::link_detect::{detect_link, LinkRef};

/// How long the input must sit still before a text search fires.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(450);

/// What the owning widget must do with its delayed-search timer after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceDirective {
    /// Cancel any armed dispatch; the text became empty or turned into a link.
    Cancel,
    /// Cancel the previous dispatch and arm a new one for this query.
    Restart { query: String },
}

/// Icon the submit button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonIcon {
    Spinner,
    Go,
    Search,
}

/// Local state of the search widget: the typed text, its link classification,
/// and whether a plain-text search window is open.
///
/// Owned by the widget alone and replaced wholesale on each edit. Everything
/// else the widget shows comes from the store, read-only.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    text: String,
    last_edit: Option<Instant>,
    detected: Option<LinkRef>,
    links_seen: Option<usize>,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn detected_link(&self) -> Option<&LinkRef> {
        self.detected.as_ref()
    }

    /// True while a plain-text search window is open: non-empty text that is
    /// not a recognized link.
    pub fn results_visible(&self) -> bool {
        self.last_edit.is_some()
    }

    /// The result subset the widget actually shows: the store's results while
    /// a search window is open, nothing otherwise.
    pub fn visible_results<'a, T>(&self, results: &'a [T]) -> &'a [T] {
        if self.last_edit.is_some() {
            results
        } else {
            &[]
        }
    }

    /// Reset text and classification (explicit clear, or a create completed).
    pub fn clear(&mut self) {
        self.text.clear();
        self.last_edit = None;
        self.detected = None;
    }

    /// Apply an edited value and dispatch the immediate consequences.
    ///
    /// Empty text and pasted links stop any search that was brewing; plain
    /// text opens the search window and asks the widget to (re)arm its
    /// delayed dispatch.
    pub fn set_text(&mut self, text: String, actions: &dyn SearchActions) -> DebounceDirective {
        self.detected = detect_link(&text);
        self.last_edit = if !text.is_empty() && self.detected.is_none() {
            Some(Instant::now())
        } else {
            None
        };
        self.text = text;

        if self.text.is_empty() || self.detected.is_some() {
            actions.set_search_loading(false);
            actions.clear_results();
            return DebounceDirective::Cancel;
        }

        actions.set_create_link_error(false);
        actions.set_search_loading(true);
        DebounceDirective::Restart {
            query: self.text.clone(),
        }
    }

    /// A detected link is invalid when the store has flagged its id.
    pub fn is_invalid(&self, invalid_links: &HashSet<String>) -> bool {
        self.detected
            .as_ref()
            .is_some_and(|link| invalid_links.contains(&link.id))
    }

    /// Button click or Enter: create the link when one is detected and not
    /// flagged invalid; otherwise retry the text as a search.
    pub fn submit(&self, invalid_links: &HashSet<String>, actions: &dyn SearchActions) {
        if !self.is_invalid(invalid_links) {
            if let Some(link) = &self.detected {
                actions.set_create_link_error(false);
                actions.create_link(NewLink {
                    source: link.source,
                    source_id: link.id.clone(),
                });
                return;
            }
        }
        if !self.text.is_empty() {
            actions.set_create_link_error(false);
            actions.search(&self.text);
        }
    }

    /// Focusing with unresolved text fires a search immediately, no debounce.
    pub fn focus(&self, actions: &dyn SearchActions) {
        if !self.text.is_empty() && self.detected.is_none() {
            actions.set_create_link_error(false);
            actions.search(&self.text);
        }
    }

    /// Leaving the field never leaves stale results behind.
    pub fn blur(&self, actions: &dyn SearchActions) {
        actions.clear_results();
    }

    /// Backspace on an already-empty field clears any lingering results.
    pub fn backspace(&self, actions: &dyn SearchActions) {
        if self.text.is_empty() {
            actions.clear_results();
        }
    }

    /// Track the store's link-list length across renders. Growth while a link
    /// is pending means our create request landed, so local state resets to
    /// empty. The first observation only records the baseline. Returns true
    /// when a reset happened.
    pub fn observe_links_len(&mut self, len: usize) -> bool {
        let grew = self.links_seen.is_some_and(|seen| len > seen);
        self.links_seen = Some(len);
        if grew && self.detected.is_some() {
            self.clear();
            true
        } else {
            false
        }
    }

    pub fn button_icon(&self, search_loading: bool, link_loading: bool) -> ButtonIcon {
        if search_loading || link_loading {
            ButtonIcon::Spinner
        } else if self.detected.is_some() {
            ButtonIcon::Go
        } else {
            ButtonIcon::Search
        }
    }

    /// The "No results found" banner: an open search window that came back
    /// empty. Checks the same visible subset the result list renders, so the
    /// banner and the list cannot disagree.
    pub fn show_no_results<T>(&self, search_loading: bool, results: &[T]) -> bool {
        !self.text.is_empty()
            && !search_loading
            && self.visible_results(results).is_empty()
            && self.detected.is_none()
    }
}
