//! Client API calls for search and document endpoints.

use common::{error::SearchError, search_request::BackendRequest, search_result::SearchResponse};
use dioxus::prelude::*;

/// The inner result keeps the search error taxonomy intact across the wire.
#[server]
pub async fn execute_search(request: BackendRequest) -> Result<Result<SearchResponse, SearchError>, ServerFnError> {
    Ok(backend::api::search::execute_search(request).await)
}

#[server]
pub async fn fetch_document_preview(file_path: String) -> Result<String, ServerFnError> {
    let x = backend::api::documents::fetch_document_preview(file_path).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

/// Runs a request and folds server-function failures into the search error type.
pub async fn run_search(request: BackendRequest) -> Result<SearchResponse, SearchError> {
    match execute_search(request).await {
        Ok(result) => result,
        Err(e) => Err(SearchError::Transport(e.to_string())),
    }
}
