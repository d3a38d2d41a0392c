use crate::config::use_config;
use crate::link_api::{LinkApiClient, LinkApiError};
use crate::models::{NewLink, SongResult, TrackLink};
use crate::search::SearchActions;
use dioxus::prelude::*;
use std::collections::HashSet;
use std::rc::Rc;
use tracing::{info, warn};

/// Shared search and link state plus the async actions that drive it.
///
/// Components read the signals directly; the search widget dispatches
/// through the [`SearchActions`] surface so its logic stays testable away
/// from the UI.
#[derive(Clone)]
pub struct LinkStore {
    pub results: Signal<Vec<SongResult>>,
    pub links: Signal<Vec<TrackLink>>,
    /// Source track ids the backend has rejected with 422.
    pub invalid_links: Signal<HashSet<String>>,
    pub search_loading: Signal<bool>,
    pub link_loading: Signal<bool>,
    pub create_link_failed: Signal<bool>,
    client: LinkApiClient,
}

impl LinkStore {
    pub fn new(config: &crate::config::Config) -> Self {
        Self {
            results: Signal::new(Vec::new()),
            links: Signal::new(Vec::new()),
            invalid_links: Signal::new(HashSet::new()),
            search_loading: Signal::new(false),
            link_loading: Signal::new(false),
            create_link_failed: Signal::new(false),
            client: LinkApiClient::new(config.api_base_url.clone()),
        }
    }

    /// Fire a song search and replace the result list when it answers. The
    /// widget raises the loading flag at keystroke time; this only lowers it
    /// once the request settles.
    pub fn search(&self, query: &str) {
        if query.trim().is_empty() {
            // Nothing to ask the backend; the request still "settles" so the
            // loading flag the widget raised at keystroke time comes down.
            let mut results = self.results;
            let mut search_loading = self.search_loading;
            results.set(Vec::new());
            search_loading.set(false);
            return;
        }

        let client = self.client.clone();
        let query = query.to_string();
        let mut results = self.results;
        let mut search_loading = self.search_loading;

        spawn(async move {
            match client.search_songs(&query).await {
                Ok(songs) => {
                    info!("✓ Song search '{}' returned {} result(s)", query, songs.len());
                    results.set(songs);
                }
                Err(e) => {
                    warn!("✗ Song search '{}' failed: {}", query, e);
                    results.set(Vec::new());
                }
            }
            search_loading.set(false);
        });
    }

    /// Create a shared link from a source track id. A 422 from the backend
    /// flags the id as invalid; any other failure raises the error banner.
    pub fn create_link(&self, request: NewLink) {
        let client = self.client.clone();
        let mut links = self.links;
        let mut invalid_links = self.invalid_links;
        let mut link_loading = self.link_loading;
        let mut create_link_failed = self.create_link_failed;

        spawn(async move {
            link_loading.set(true);

            match client.create_link(&request).await {
                Ok(link) => {
                    info!("✓ Created {} link for track {}", link.source, link.source_id);
                    links.write().insert(0, link);
                }
                Err(LinkApiError::InvalidSourceId) => {
                    warn!("✗ {} rejected track id {}", request.source, request.source_id);
                    invalid_links.write().insert(request.source_id.clone());
                }
                Err(e) => {
                    warn!("✗ Link creation failed: {}", e);
                    create_link_failed.set(true);
                }
            }

            link_loading.set(false);
        });
    }

    pub fn clear_results(&self) {
        let mut results = self.results;
        results.set(Vec::new());
    }

    pub fn set_search_loading(&self, loading: bool) {
        let mut search_loading = self.search_loading;
        search_loading.set(loading);
    }

    pub fn set_create_link_error(&self, failed: bool) {
        let mut create_link_failed = self.create_link_failed;
        create_link_failed.set(failed);
    }
}

impl SearchActions for LinkStore {
    fn search(&self, query: &str) {
        LinkStore::search(self, query)
    }

    fn clear_results(&self) {
        LinkStore::clear_results(self)
    }

    fn create_link(&self, request: NewLink) {
        LinkStore::create_link(self, request)
    }

    fn set_search_loading(&self, loading: bool) {
        LinkStore::set_search_loading(self, loading)
    }

    fn set_create_link_error(&self, failed: bool) {
        LinkStore::set_create_link_error(self, failed)
    }
}

/// Provider component to make the link store available throughout the app
#[component]
pub fn LinkStoreProvider(children: Element) -> Element {
    let config = use_config();

    use_context_provider(move || Rc::new(LinkStore::new(&config)));

    rsx! {
        {children}
    }
}

/// Access the shared link store from any component under the provider
pub fn use_link_store() -> Rc<LinkStore> {
    use_context()
}
