//! Request payloads sent to the search backend and the builder that assembles them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::SearchError,
    filter_selection::{DateRange, Facet, FilterSelection},
    search_const::{ATTACHMENT_LINK_ENDPOINT, SEARCH_ENDPOINT},
    search_query::{SearchMode, SearchQuery},
    search_result::SearchCursor,
};

/// Body of `POST /search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub queries: Vec<String>,
    pub size: u64,
    pub search_type: SearchMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_after: Option<SearchCursor>,
    pub stream: bool,
}

/// Body of `POST /handle-attachment-link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentLinkRequest {
    pub app_id: String,
    pub parent_app_id: String,
    pub is_attachment: bool,
}

/// Identifies one document and its parent/attachment relation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttachmentLookup {
    pub prop_id: String,
    pub parent_prop_id: String,
    pub is_attachment: bool,
}

impl From<&AttachmentLookup> for AttachmentLinkRequest {
    fn from(lookup: &AttachmentLookup) -> Self {
        Self {
            app_id: lookup.prop_id.clone(),
            parent_app_id: lookup.parent_prop_id.clone(),
            is_attachment: lookup.is_attachment,
        }
    }
}

/// One logical request: a paginated search or a single-document lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BackendRequest {
    Search(SearchRequest),
    AttachmentLink(AttachmentLinkRequest),
}

impl BackendRequest {
    pub fn endpoint(&self) -> &'static str {
        match self {
            BackendRequest::Search(_) => SEARCH_ENDPOINT,
            BackendRequest::AttachmentLink(_) => ATTACHMENT_LINK_ENDPOINT,
        }
    }

    pub fn is_attachment_lookup(&self) -> bool {
        matches!(self, BackendRequest::AttachmentLink(_))
    }

    pub fn body(&self) -> serde_json::Value {
        let value = match self {
            BackendRequest::Search(r) => serde_json::to_value(r),
            BackendRequest::AttachmentLink(r) => serde_json::to_value(r),
        };
        value.unwrap_or(serde_json::Value::Null)
    }
}

/// Everything the builder needs from the UI state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestInput {
    pub query: SearchQuery,
    pub filters: FilterSelection,
    pub mode: SearchMode,
    pub cursor: Option<SearchCursor>,
    pub page_size: u64,
    pub attachment: Option<AttachmentLookup>,
}

/// Builds the request body and endpoint for the given UI state.
///
/// Fails with [`SearchError::IncompleteDateRange`] before anything else, in
/// both search and attachment-lookup mode.
pub fn build_request(input: &RequestInput) -> Result<BackendRequest, SearchError> {
    let date_range = input.filters.date_range()?;

    if let Some(lookup) = &input.attachment {
        return Ok(BackendRequest::AttachmentLink(lookup.into()));
    }

    let mut filters = BTreeMap::new();
    for facet in Facet::ALL {
        let values = input.filters.selected(facet);
        if !values.is_empty() {
            filters.insert(facet.backend_field().to_string(), values.iter().cloned().collect());
        }
    }

    Ok(BackendRequest::Search(SearchRequest {
        queries: input.query.terms.clone(),
        size: input.page_size,
        search_type: input.mode,
        filters: if filters.is_empty() { None } else { Some(filters) },
        date_range,
        search_after: input.cursor.clone(),
        stream: false,
    }))
}
