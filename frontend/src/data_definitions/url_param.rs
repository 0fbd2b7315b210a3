//! URL parameter helpers and types.

use std::fmt::Display;

use common::{
    search_query::{SearchMode, SearchQuery},
    search_request::AttachmentLookup,
    url_query::SearchUrlParams,
};
use serde::{Deserialize, Serialize};

/// Query string of the search route. The router builds it from the raw
/// query string and writes it back through `Display`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SearchUrl(pub SearchUrlParams);

impl SearchUrl {
    pub fn search(query: &SearchQuery, mode: SearchMode) -> Self {
        SearchUrl(SearchUrlParams::for_search(query, mode))
    }

    pub fn attachment(lookup: &AttachmentLookup) -> Self {
        SearchUrl(SearchUrlParams::for_attachment(lookup))
    }
}

impl From<&str> for SearchUrl {
    fn from(query: &str) -> Self {
        SearchUrl(SearchUrlParams::parse(query))
    }
}

impl Display for SearchUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_query_string())
    }
}
