#[cfg(feature = "desktop")]
use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[cfg(feature = "desktop")]
pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

#[cfg(feature = "desktop")]
fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("droptune")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(520, 760))
}
