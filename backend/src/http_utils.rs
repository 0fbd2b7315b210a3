use std::sync::OnceLock;

/// Shared connection pool for every outgoing request.
pub fn get_http_client() -> reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new).clone()
}

/// Joins a base URL and an absolute endpoint path.
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), endpoint)
}

/// Reason phrase of a status, empty for non-standard codes.
pub fn status_text(status: reqwest::StatusCode) -> String {
    status.canonical_reason().unwrap_or("").to_string()
}
