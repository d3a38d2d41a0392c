use dioxus::prelude::*;

/// Application configuration
/// In debug builds: loads from .env file
/// In release builds: loads from ~/.droptune/config.yaml (TODO)
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the droptune backend API
    pub api_base_url: String,
}

/// Backend used when nothing is configured, matching the dev server.
const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            // Try to load .env file
            if dotenvy::dotenv().is_ok() {
                tracing::info!("Config: Dev mode activated - loaded .env file");
            } else {
                tracing::info!("Config: No .env file found, using defaults");
            }

            Self::from_env()
        }

        #[cfg(not(debug_assertions))]
        {
            Self::from_config_file()
        }
    }

    /// Load configuration from environment variables (dev mode)
    #[cfg(debug_assertions)]
    fn from_env() -> Self {
        let api_base_url =
            std::env::var("DROPTUNE_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        tracing::info!("Config: API base URL: {}", api_base_url);

        Self { api_base_url }
    }

    /// Load configuration from config.yaml (production mode)
    #[cfg(not(debug_assertions))]
    fn from_config_file() -> Self {
        // TODO: Implement config.yaml loading
        tracing::info!("Config: Production mode - loading from config.yaml (not implemented yet)");

        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Provider component to make configuration available throughout the app
#[component]
pub fn ConfigProvider(children: Element) -> Element {
    use_context_provider(Config::load);

    rsx! {
        {children}
    }
}

/// Access the loaded configuration from any component under the provider
pub fn use_config() -> Config {
    use_context()
}
