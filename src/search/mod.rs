//! Headless search-input logic: link classification, the widget state
//! machine, and the command surface it dispatches through. UI glue lives in
//! `crate::ui`; nothing here touches Dioxus.

pub mod actions;
pub mod input;
pub mod link_detect;

pub use actions::SearchActions;
pub use input::{ButtonIcon, DebounceDirective, SearchInput, SEARCH_DEBOUNCE};
pub use link_detect::{detect_link, LinkRef};
