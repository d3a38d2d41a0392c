pub mod bar;
pub mod notices;
pub mod results;

pub use bar::SearchBar;
pub use notices::{CreateLinkErrorNotice, InvalidLinkNotice, NoResultsNotice};
pub use results::SearchResults;
