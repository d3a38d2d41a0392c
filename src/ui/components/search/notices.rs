use dioxus::prelude::*;

/// Shown while the pasted link's track id is flagged invalid.
#[component]
pub fn InvalidLinkNotice() -> Element {
    rsx! {
        div { class: "search-information invalid",
            span { class: "icon-warning" }
            span { " Invalid link url" }
        }
    }
}

/// Shown when an open text search came back with nothing.
#[component]
pub fn NoResultsNotice() -> Element {
    rsx! {
        div { class: "search-information no-results",
            span { class: "icon-warning" }
            span { " No results found" }
        }
    }
}

/// Shown after a create-link request failed outright.
#[component]
pub fn CreateLinkErrorNotice() -> Element {
    rsx! {
        div { class: "search-information invalid",
            span { class: "icon-warning" }
            span { " Error creating link" }
        }
    }
}
