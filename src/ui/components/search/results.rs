use crate::models::SongResult;
use dioxus::prelude::*;

/// Dropdown of songs matching the current query. Rows fire on mousedown so
/// a pick wins the race against the input's blur clearing the list.
#[component]
pub fn SearchResults(results: Vec<SongResult>, on_pick: EventHandler<SongResult>) -> Element {
    if results.is_empty() {
        return rsx! {
            div {}
        };
    }

    rsx! {
        ul { class: "search-results",
            for result in results.iter() {
                ResultItem {
                    key: "{result.id}",
                    result: result.clone(),
                    on_pick: on_pick,
                }
            }
        }
    }
}

#[component]
fn ResultItem(result: SongResult, on_pick: EventHandler<SongResult>) -> Element {
    let subtitle = match &result.album {
        Some(album) => format!("{} · {}", result.artist, album),
        None => result.artist.clone(),
    };

    rsx! {
        li {
            class: "search-result",
            onmousedown: {
                let result = result.clone();
                move |_event: MouseEvent| on_pick.call(result.clone())
            },
            if let Some(artwork) = &result.artwork_url {
                img { class: "search-result-artwork", src: "{artwork}", alt: "Artwork" }
            } else {
                div { class: "search-result-artwork placeholder" }
            }
            div { class: "search-result-text",
                span { class: "search-result-title", "{result.title}" }
                span { class: "search-result-artist", "{subtitle}" }
            }
            span { class: "search-result-source", "{result.source}" }
        }
    }
}
