use crate::models::TrackLink;
use crate::ui::link_store::use_link_store;
use dioxus::prelude::*;

/// Feed of shared links, newest first.
#[component]
pub fn LinksFeed() -> Element {
    let store = use_link_store();
    let links = store.links.read().clone();

    if links.is_empty() {
        return rsx! {
            div { class: "links-feed empty",
                p { "No links yet. Search for a song or paste one to get started." }
            }
        };
    }

    rsx! {
        ul { class: "links-feed",
            for link in links.iter() {
                LinkRow { key: "{link.id}", link: link.clone() }
            }
        }
    }
}

#[component]
fn LinkRow(link: TrackLink) -> Element {
    let title = link.title.clone().unwrap_or_else(|| link.source_id.clone());
    let created = link.created_at.format("%b %e, %Y").to_string();

    rsx! {
        li { class: "link-row",
            span { class: "link-source {link.source}", "{link.source}" }
            div { class: "link-text",
                span { class: "link-title", "{title}" }
                if let Some(artist) = &link.artist {
                    span { class: "link-artist", "{artist}" }
                }
            }
            span { class: "link-date", "{created}" }
            if let Some(url) = link.external_url() {
                a { class: "link-open", href: "{url}", target: "_blank", "Open" }
            }
        }
    }
}
