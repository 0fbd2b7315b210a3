//! Search API calls and module exports.

mod search_api_client;
pub use search_api_client::SearchApiClient;

use common::{error::SearchError, search_request::BackendRequest, search_result::SearchResponse};

use crate::config::get_config;

/// Runs a search or attachment lookup against the configured search API.
pub async fn execute_search(request: BackendRequest) -> Result<SearchResponse, SearchError> {
    SearchApiClient::new(&get_config().search_api_url).search(&request).await
}
