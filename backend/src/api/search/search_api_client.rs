use common::{
    error::SearchError,
    search_request::BackendRequest,
    search_result::{SearchResponse, parse_search_response},
};

use crate::http_utils::{get_http_client, join_url, status_text};

#[derive(Debug, Clone)]
pub struct SearchApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl SearchApiClient {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.to_string(), client: get_http_client() }
    }

    /// POSTs the request body to its endpoint and adapts the answer.
    pub async fn search(&self, request: &BackendRequest) -> Result<SearchResponse, SearchError> {
        let url = join_url(&self.base_url, request.endpoint());
        let body = request.body();
        tracing::info!("search request: POST {} {}", url, body);
        let t0 = std::time::Instant::now();

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let response_txt = response.text().await.unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            tracing::warn!("search request failed: {}: {}", status, response_txt);
            return Err(SearchError::Api { status: status.as_u16(), status_text: status_text(status) });
        }
        let response_txt = response.text().await.map_err(|e| SearchError::Transport(e.to_string()))?;

        let parsed = parse_search_response(&response_txt).inspect_err(|e| {
            tracing::error!("unexpected search response structure: {e}");
        })?;
        tracing::info!(
            "search response: {} documents, more pages: {}, took {:?}",
            parsed.documents.len(),
            parsed.next_search_after.is_some(),
            t0.elapsed()
        );
        Ok(parsed)
    }
}
