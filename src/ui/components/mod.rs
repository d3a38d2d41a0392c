pub mod app;
pub mod links_feed;
pub mod search;

pub use app::App;
pub use links_feed::LinksFeed;
pub use search::SearchBar;
