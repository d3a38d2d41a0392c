pub mod app;
pub mod components;
pub mod link_store;

pub use app::*;
pub use components::*;
pub use link_store::{use_link_store, LinkStore, LinkStoreProvider};
