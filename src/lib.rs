// Library exports for integration tests and reusable components

// Internal modules needed for compilation (hidden from docs)
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod ui;

pub mod link_api;
pub mod models;
pub mod search;

// Test support (only available with test-utils feature)
#[cfg(feature = "test-utils")]
pub mod test_support;
