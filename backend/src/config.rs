//! Service locations, read once from the environment.

use std::sync::OnceLock;

pub const DEFAULT_SEARCH_API_URL: &str = "http://127.0.0.1:5001";
pub const DEFAULT_FILE_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL of the search API (`/search`, `/handle-attachment-link`).
    pub search_api_url: String,
    /// Base URL of the file server (`/api/documents/...`).
    pub file_server_url: String,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        Self {
            search_api_url: std::env::var("SEARCH_API_URL").unwrap_or(DEFAULT_SEARCH_API_URL.to_string()),
            file_server_url: std::env::var("FILE_SERVER_URL").unwrap_or(DEFAULT_FILE_SERVER_URL.to_string()),
        }
    }
}

pub fn get_config() -> &'static BackendConfig {
    static CONFIG: OnceLock<BackendConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        let config = BackendConfig::from_env();
        tracing::info!("backend config: {:?}", config);
        config
    })
}
