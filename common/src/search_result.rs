use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{document::{Document, adapt_documents}, error::SearchError, filter_selection::Facet};

/// Opaque `search_after` token: the sort values of the last hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchCursor(pub Vec<serde_json::Value>);

/// Facet value -> document count.
pub type FacetCounts = BTreeMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Aggregations {
    pub doctype_counts: Option<FacetCounts>,
    pub branchtype_counts: Option<FacetCounts>,
    pub extensiontype_counts: Option<FacetCounts>,
}

impl Aggregations {
    pub fn counts(&self, facet: Facet) -> Option<&FacetCounts> {
        match facet {
            Facet::DocType => self.doctype_counts.as_ref(),
            Facet::Branch => self.branchtype_counts.as_ref(),
            Facet::Extension => self.extensiontype_counts.as_ref(),
        }
    }
}

/// Adapted response of either endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub documents: Vec<Document>,
    pub next_search_after: Option<SearchCursor>,
    pub aggregations: Option<Aggregations>,
}

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    documents: Option<serde_json::Value>,
    #[serde(default)]
    next_search_after: Option<SearchCursor>,
    #[serde(default)]
    aggregations: Option<Aggregations>,
}

/// Parses and adapts a response body. A missing or non-array `documents`
/// field is a [`SearchError::MalformedResponse`].
pub fn parse_search_response(body: &str) -> Result<SearchResponse, SearchError> {
    let raw: RawSearchResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::MalformedResponse(e.to_string()))?;
    let documents = match raw.documents {
        Some(serde_json::Value::Array(items)) => items,
        Some(other) => {
            return Err(SearchError::MalformedResponse(format!("documents is not an array: {other}")));
        }
        None => return Err(SearchError::MalformedResponse("missing documents field".to_string())),
    };
    Ok(SearchResponse {
        documents: adapt_documents(documents)?,
        next_search_after: raw.next_search_after,
        aggregations: raw.aggregations,
    })
}
