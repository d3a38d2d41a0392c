use crate::config::ConfigProvider;
use crate::ui::link_store::LinkStoreProvider;
use crate::ui::MAIN_CSS;
use dioxus::prelude::*;
use tracing::debug;

use super::links_feed::LinksFeed;
use super::search::SearchBar;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ConfigProvider {
            LinkStoreProvider {
                div { class: "page",
                    header { class: "page-header",
                        h1 { "droptune" }
                        p { class: "tagline", "Drop a song, share the link" }
                    }
                    SearchBar {}
                    LinksFeed {}
                }
            }
        }
    }
}
