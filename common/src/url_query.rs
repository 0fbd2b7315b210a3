//! Query string of the search page.
//!
//! A search page URL carries either a search (`type`, `q`) or an
//! attachment/parent lookup (`PropId`, `ParentPropId`, `isAttachment`).
//! A non-empty `PropId` switches the page into lookup mode.

use serde::{Deserialize, Serialize};

use crate::{
    search_query::{SearchMode, SearchQuery},
    search_request::AttachmentLookup,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchUrlParams {
    /// `type`; unknown or missing values fall back to `any`.
    pub mode: SearchMode,
    /// `q` (or `query`) exactly as found in the URL, after percent-decoding.
    pub raw_query: String,
    pub prop_id: Option<String>,
    pub parent_prop_id: String,
    pub is_attachment: bool,
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map(|s| s.into_owned()).unwrap_or(spaced)
}

impl SearchUrlParams {
    /// Parses a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let mut params = Self::default();
        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);
            match decode_component(key).as_str() {
                "type" => params.mode = value.parse().unwrap_or_default(),
                "q" | "query" => params.raw_query = value,
                "PropId" | "propId" => params.prop_id = Some(value).filter(|v| !v.is_empty()),
                "ParentPropId" | "ParentpropId" => params.parent_prop_id = value,
                "isAttachment" => params.is_attachment = value == "true",
                _ => {}
            }
        }
        params
    }

    pub fn for_search(query: &SearchQuery, mode: SearchMode) -> Self {
        Self { mode, raw_query: query.to_url_param(), ..Default::default() }
    }

    pub fn for_attachment(lookup: &AttachmentLookup) -> Self {
        Self {
            prop_id: Some(lookup.prop_id.clone()).filter(|v| !v.is_empty()),
            parent_prop_id: lookup.parent_prop_id.clone(),
            is_attachment: lookup.is_attachment,
            ..Default::default()
        }
    }

    pub fn query(&self) -> SearchQuery {
        SearchQuery::from_url_param(&self.raw_query)
    }

    /// Lookup to run instead of a search, when the URL names a document.
    pub fn attachment_lookup(&self) -> Option<AttachmentLookup> {
        self.prop_id.as_ref().map(|prop_id| AttachmentLookup {
            prop_id: prop_id.clone(),
            parent_prop_id: self.parent_prop_id.clone(),
            is_attachment: self.is_attachment,
        })
    }

    /// Query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        match &self.prop_id {
            Some(prop_id) => format!(
                "PropId={}&ParentPropId={}&isAttachment={}",
                urlencoding::encode(prop_id),
                urlencoding::encode(&self.parent_prop_id),
                self.is_attachment
            ),
            None => format!("type={}&q={}", self.mode, urlencoding::encode(&self.raw_query)),
        }
    }
}
