use crate::models::NewLink;

/// Store-bound commands the search widget dispatches.
///
/// The widget never reads anything back through this surface; every call is
/// fire-and-forget. The real implementation lives on the UI store, and tests
/// substitute a recording double.
pub trait SearchActions {
    /// Run a text search for songs.
    fn search(&self, query: &str);

    /// Drop the current result list.
    fn clear_results(&self);

    /// Create a link resource from a detected track reference.
    fn create_link(&self, request: NewLink);

    /// Raise or drop the search-in-flight flag.
    fn set_search_loading(&self, loading: bool);

    /// Raise or drop the create-link failure flag.
    fn set_create_link_error(&self, failed: bool);
}
