use crate::models::{NewLink, SongResult};
use crate::search::{ButtonIcon, DebounceDirective, SearchInput, SEARCH_DEBOUNCE};
use crate::ui::link_store::{use_link_store, LinkStore};
use dioxus::core::Task;
use dioxus::prelude::*;
use std::rc::Rc;

use super::notices::{CreateLinkErrorNotice, InvalidLinkNotice, NoResultsNotice};
use super::results::SearchResults;

/// One-field search box. Free text queries songs once typing pauses; a
/// pasted track link switches the button over to link creation.
#[component]
pub fn SearchBar() -> Element {
    let store = use_link_store();
    let mut input = use_signal(SearchInput::new);
    let pending_search = use_signal(|| None::<Task>);

    // A create that lands grows the feed; drop the pasted text once it does.
    {
        let store = store.clone();
        use_effect(move || {
            let len = store.links.read().len();
            input.write().observe_links_len(len);
        });
    }

    let on_input = {
        let store = store.clone();
        move |event: FormEvent| {
            let directive = input.write().set_text(event.value(), &*store);
            match directive {
                DebounceDirective::Cancel => cancel_pending(pending_search),
                DebounceDirective::Restart { query } => {
                    arm_search(pending_search, store.clone(), query)
                }
            }
        }
    };

    let on_keyup = {
        let store = store.clone();
        move |event: KeyboardEvent| match event.key() {
            Key::Enter => {
                let invalid = store.invalid_links.read().clone();
                input.read().submit(&invalid, &*store);
            }
            Key::Backspace => input.read().backspace(&*store),
            _ => {}
        }
    };

    let on_focus = {
        let store = store.clone();
        move |_event: FocusEvent| input.read().focus(&*store)
    };

    let on_blur = {
        let store = store.clone();
        move |_event: FocusEvent| input.read().blur(&*store)
    };

    let on_submit = {
        let store = store.clone();
        move |_event: MouseEvent| {
            let invalid = store.invalid_links.read().clone();
            input.read().submit(&invalid, &*store);
        }
    };

    let on_pick = {
        let store = store.clone();
        move |song: SongResult| {
            store.create_link(NewLink {
                source: song.source,
                source_id: song.source_id,
            });
            input.write().clear();
        }
    };

    let text = input.read().text().to_string();
    let invalid = input.read().is_invalid(&store.invalid_links.read());
    let search_loading = *store.search_loading.read();
    let link_loading = *store.link_loading.read();
    let create_link_failed = *store.create_link_failed.read();
    let results = store.results.read().clone();
    let visible = input.read().visible_results(&results).to_vec();
    let no_results = input.read().show_no_results(search_loading, &results);

    let placeholder = if link_loading {
        "Creating link..."
    } else {
        "Search or paste song URL"
    };

    let button_icon = match input.read().button_icon(search_loading, link_loading) {
        ButtonIcon::Spinner => rsx! { span { class: "spinner" } },
        ButtonIcon::Go => rsx! { span { class: "icon icon-go", "→" } },
        ButtonIcon::Search => rsx! { span { class: "icon icon-search", "⌕" } },
    };

    rsx! {
        div { class: "search",
            div {
                class: if invalid { "search-bar is-invalid" } else { "search-bar" },
                button { class: "search-button", onclick: on_submit, {button_icon} }
                input {
                    class: if invalid { "is-invalid" } else { "" },
                    r#type: "text",
                    placeholder: placeholder,
                    autofocus: true,
                    value: "{text}",
                    oninput: on_input,
                    onfocus: on_focus,
                    onblur: on_blur,
                    onkeyup: on_keyup,
                }
                SearchResults { results: visible, on_pick: on_pick }
            }
            if invalid {
                InvalidLinkNotice {}
            }
            if no_results {
                NoResultsNotice {}
            }
            if create_link_failed {
                CreateLinkErrorNotice {}
            }
        }
    }
}

/// Drop the armed search dispatch, if any.
fn cancel_pending(mut pending: Signal<Option<Task>>) {
    if let Some(task) = pending.take() {
        task.cancel();
    }
}

/// Replace the armed dispatch with a fresh one for this query. The previous
/// task is cancelled outright, so only the latest query can ever fire.
fn arm_search(mut pending: Signal<Option<Task>>, store: Rc<LinkStore>, query: String) {
    cancel_pending(pending);

    let task = spawn(async move {
        tokio::time::sleep(SEARCH_DEBOUNCE).await;
        store.search(&query);
    });
    pending.set(Some(task));
}
