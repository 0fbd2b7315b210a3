//! State container of the search page.
//!
//! The page keeps one [`SearchState`] and drives it through three transitions:
//! [`SearchState::begin`] when a request is issued, [`SearchState::apply`]
//! when its response (or failure) comes back, and [`SearchState::reject`] when
//! the request could not even be built. Every issued request gets a ticket and
//! only the most recently issued one may change the state, so a slow response
//! to an older request is dropped instead of overwriting newer results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    document::Document,
    error::SearchError,
    filter_selection::{Facet, FilterSelection},
    search_const::{GRID_DEFAULT_PAGE_SIZE, INVALID_QUERY_MESSAGE, PAGE_SIZE},
    search_query::{query_gate, QueryGate, SearchMode, SearchQuery},
    search_request::{AttachmentLookup, RequestInput},
    search_result::{FacetCounts, SearchCursor, SearchResponse},
    url_query::SearchUrlParams,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Reader,
    Grid,
}

/// Everything on the page that shapes a fresh search. Any change to it
/// starts a new first-page search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInputs {
    pub query: SearchQuery,
    pub mode: SearchMode,
    pub filters: FilterSelection,
    pub view: ViewMode,
    pub grid_page_size: u64,
}

impl Default for SearchInputs {
    fn default() -> Self {
        Self {
            query: SearchQuery::default(),
            mode: SearchMode::default(),
            filters: FilterSelection::default(),
            view: ViewMode::default(),
            grid_page_size: GRID_DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchInputs {
    /// Server-side page size: the grid selector in grid view, the reader
    /// constant otherwise.
    pub fn page_size(&self) -> u64 {
        match self.view {
            ViewMode::Grid => self.grid_page_size,
            ViewMode::Reader => PAGE_SIZE,
        }
    }

    pub fn request_input(&self, cursor: Option<SearchCursor>, attachment: Option<AttachmentLookup>) -> RequestInput {
        RequestInput {
            query: self.query.clone(),
            filters: self.filters.clone(),
            mode: self.mode,
            cursor,
            page_size: self.page_size(),
            attachment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    Fresh,
    LoadMore,
    AttachmentLookup,
}

/// What the page does after its URL or inputs changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Send(RequestKind, RequestInput),
    ShowInvalidQuery,
    Clear,
}

/// Picks the request for the current URL and inputs. A URL naming a
/// document only ever runs the attachment lookup. Otherwise the query gate
/// decides, and any input change restarts from the first page.
pub fn on_inputs_changed(params: &SearchUrlParams, inputs: &SearchInputs) -> Dispatch {
    if let Some(lookup) = params.attachment_lookup() {
        return Dispatch::Send(RequestKind::AttachmentLookup, inputs.request_input(None, Some(lookup)));
    }
    match query_gate(&params.raw_query, &inputs.query.terms) {
        QueryGate::Run => Dispatch::Send(RequestKind::Fresh, inputs.request_input(None, None)),
        QueryGate::Invalid => Dispatch::ShowInvalidQuery,
        QueryGate::Empty => Dispatch::Clear,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    id: u64,
    pub kind: RequestKind,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub documents: Vec<Document>,
    pub cursor: Option<SearchCursor>,
    /// Absent until the backend has reported counts for the facet.
    pub facet_counts: BTreeMap<Facet, FacetCounts>,
    pub loading: bool,
    pub error: Option<String>,
    issued: u64,
    in_flight: Option<RequestTicket>,
}

impl SearchState {
    pub fn can_load_more(&self) -> bool {
        !self.loading && self.cursor.is_some()
    }

    pub fn facet_counts(&self, facet: Facet) -> Option<&FacetCounts> {
        self.facet_counts.get(&facet)
    }

    /// Cursor to send with a request of the given kind.
    pub fn request_cursor(&self, kind: RequestKind) -> Option<SearchCursor> {
        match kind {
            RequestKind::LoadMore => self.cursor.clone(),
            RequestKind::Fresh | RequestKind::AttachmentLookup => None,
        }
    }

    fn next_ticket(&mut self, kind: RequestKind) -> RequestTicket {
        self.issued += 1;
        RequestTicket { id: self.issued, kind }
    }

    /// Issues a request. Returns `None` for a load-more while another request
    /// is running or when there is no next page.
    pub fn begin(&mut self, kind: RequestKind) -> Option<RequestTicket> {
        if kind == RequestKind::LoadMore && !self.can_load_more() {
            return None;
        }
        let ticket = self.next_ticket(kind);
        self.in_flight = Some(ticket);
        self.loading = true;
        if kind != RequestKind::LoadMore {
            self.error = None;
            self.documents.clear();
            self.cursor = None;
        }
        Some(ticket)
    }

    /// Reconciles the outcome of a request. Returns `false` when the ticket
    /// is stale and the outcome was dropped.
    pub fn apply(&mut self, ticket: RequestTicket, outcome: Result<SearchResponse, SearchError>) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        self.loading = false;

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                self.error = Some(err.user_message());
                self.documents.clear();
                self.cursor = None;
                return true;
            }
        };

        match ticket.kind {
            RequestKind::LoadMore => self.documents.extend(response.documents),
            RequestKind::Fresh | RequestKind::AttachmentLookup => self.documents = response.documents,
        }
        self.cursor = match ticket.kind {
            RequestKind::AttachmentLookup => None,
            RequestKind::Fresh | RequestKind::LoadMore => response.next_search_after,
        };

        if ticket.kind != RequestKind::AttachmentLookup {
            let aggregations = response.aggregations.unwrap_or_default();
            for facet in Facet::ALL {
                if let Some(counts) = aggregations.counts(facet) {
                    self.facet_counts.insert(facet, counts.clone());
                } else if ticket.kind == RequestKind::Fresh {
                    self.facet_counts.insert(facet, FacetCounts::new());
                }
            }
        }
        true
    }

    /// Records a request that failed validation and was never sent.
    pub fn reject(&mut self, kind: RequestKind, err: &SearchError) {
        self.in_flight = None;
        self.loading = false;
        self.error = Some(err.user_message());
        if kind != RequestKind::LoadMore {
            self.documents.clear();
            self.cursor = None;
        }
    }

    /// A query parameter was present but held no usable term.
    pub fn show_invalid_query(&mut self) {
        self.clear();
        self.error = Some(INVALID_QUERY_MESSAGE.to_string());
    }

    /// Nothing to search for: empty list, no message.
    pub fn clear(&mut self) {
        self.in_flight = None;
        self.loading = false;
        self.documents.clear();
        self.cursor = None;
        self.error = None;
    }
}

/// Keeps only facet values that are selected or still reported by the
/// backend, highest count first. Selected values missing from the counts are
/// listed with a zero count so they can be unselected.
pub fn facet_value_list(counts: Option<&FacetCounts>, filters: &FilterSelection, facet: Facet) -> Vec<(String, u64)> {
    let mut values: Vec<(String, u64)> = counts.map(|c| c.iter().map(|(k, v)| (k.clone(), *v)).collect()).unwrap_or_default();
    for selected in filters.selected(facet) {
        if !values.iter().any(|(k, _)| k == selected) {
            values.push((selected.clone(), 0));
        }
    }
    values.sort_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));
    values
}

#[cfg(test)]
mod tests;
