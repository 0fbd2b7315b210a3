use serde_json::json;

use super::*;
use crate::{
    search_request::{BackendRequest, build_request},
    search_result::{Aggregations, parse_search_response},
};

fn response(body: serde_json::Value) -> SearchResponse {
    parse_search_response(&body.to_string()).unwrap()
}

fn page(ids: &[&str], cursor: Option<&str>) -> SearchResponse {
    let documents: Vec<_> = ids.iter().map(|id| json!({"PropId": id})).collect();
    response(json!({
        "documents": documents,
        "next_search_after": cursor.map(|c| json!([c])),
    }))
}

fn ids(state: &SearchState) -> Vec<String> {
    state.documents.iter().map(|d| d.prop_id().unwrap_or_default()).collect()
}

#[test]
fn fresh_search_replaces_documents() {
    let mut state = SearchState::default();
    let t = state.begin(RequestKind::Fresh).unwrap();
    assert!(state.loading);
    assert!(state.apply(t, Ok(page(&["a", "b"], Some("b")))));

    let t = state.begin(RequestKind::Fresh).unwrap();
    assert!(state.documents.is_empty());
    state.apply(t, Ok(page(&["c"], None)));
    assert_eq!(ids(&state), vec!["c"]);
    assert!(!state.loading);
    assert_eq!(state.cursor, None);
}

#[test]
fn load_more_appends_and_advances_cursor() {
    let mut state = SearchState::default();
    let t = state.begin(RequestKind::Fresh).unwrap();
    state.apply(t, Ok(page(&["a", "b"], Some("b"))));
    assert_eq!(state.request_cursor(RequestKind::LoadMore), Some(SearchCursor(vec![json!("b")])));
    assert_eq!(state.request_cursor(RequestKind::Fresh), None);

    let t = state.begin(RequestKind::LoadMore).unwrap();
    // documents stay visible while the next page loads
    assert_eq!(ids(&state), vec!["a", "b"]);
    state.apply(t, Ok(page(&["c"], Some("c"))));
    assert_eq!(ids(&state), vec!["a", "b", "c"]);
    assert_eq!(state.cursor, Some(SearchCursor(vec![json!("c")])));
}

#[test]
fn load_more_needs_a_cursor_and_an_idle_state() {
    let mut state = SearchState::default();
    assert_eq!(state.begin(RequestKind::LoadMore), None);

    let t = state.begin(RequestKind::Fresh).unwrap();
    state.apply(t, Ok(page(&["a"], Some("a"))));
    assert!(state.can_load_more());

    let first = state.begin(RequestKind::LoadMore);
    assert!(first.is_some());
    assert_eq!(state.begin(RequestKind::LoadMore), None);
}

#[test]
fn attachment_lookup_replaces_and_drops_cursor() {
    let mut state = SearchState::default();
    let t = state.begin(RequestKind::Fresh).unwrap();
    state.apply(t, Ok(page(&["a", "b"], Some("b"))));

    let t = state.begin(RequestKind::AttachmentLookup).unwrap();
    state.apply(t, Ok(page(&["parent", "child"], Some("child"))));
    assert_eq!(ids(&state), vec!["parent", "child"]);
    assert_eq!(state.cursor, None);
    assert!(!state.can_load_more());
}

#[test]
fn stale_responses_are_ignored() {
    let mut state = SearchState::default();
    let slow = state.begin(RequestKind::Fresh).unwrap();
    let fast = state.begin(RequestKind::Fresh).unwrap();

    assert!(state.apply(fast, Ok(page(&["new"], None))));
    assert!(!state.apply(slow, Ok(page(&["old"], Some("old")))));
    assert_eq!(ids(&state), vec!["new"]);
    assert_eq!(state.cursor, None);
}

#[test]
fn response_after_clear_is_ignored() {
    let mut state = SearchState::default();
    let t = state.begin(RequestKind::Fresh).unwrap();
    state.clear();
    assert!(!state.apply(t, Ok(page(&["late"], None))));
    assert!(state.documents.is_empty());
}

#[test]
fn failure_empties_the_list_with_a_message() {
    let mut state = SearchState::default();
    let t = state.begin(RequestKind::Fresh).unwrap();
    state.apply(t, Ok(page(&["a"], Some("a"))));

    let t = state.begin(RequestKind::LoadMore).unwrap();
    let err = SearchError::Api { status: 500, status_text: "Internal Server Error".into() };
    state.apply(t, Err(err));
    assert!(state.documents.is_empty());
    assert_eq!(state.cursor, None);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch documents."));
    assert!(!state.loading);
}

#[test]
fn new_request_clears_previous_error() {
    let mut state = SearchState::default();
    let t = state.begin(RequestKind::Fresh).unwrap();
    state.apply(t, Err(SearchError::Transport("connection refused".into())));
    assert!(state.error.is_some());
    state.begin(RequestKind::Fresh).unwrap();
    assert_eq!(state.error, None);
}

#[test]
fn validation_rejection_shows_message_without_request() {
    let mut state = SearchState::default();
    let mut inputs = SearchInputs::default();
    inputs.query = SearchQuery::from_url_param("budget");
    inputs.filters.set_from_date("2023-01-01");

    let err = build_request(&inputs.request_input(None, None)).unwrap_err();
    state.reject(RequestKind::Fresh, &err);
    assert_eq!(
        state.error.as_deref(),
        Some("Please provide a complete date range (both start and end dates).")
    );
    assert!(state.documents.is_empty());
    assert!(!state.loading);
}

#[test]
fn invalid_query_message() {
    let mut state = SearchState::default();
    state.show_invalid_query();
    assert_eq!(
        state.error.as_deref(),
        Some("Invalid or empty search query provided. Please use double quotes for phrases.")
    );
}

#[test]
fn counts_update_when_present() {
    let mut state = SearchState::default();
    assert_eq!(state.facet_counts(Facet::DocType), None);

    let t = state.begin(RequestKind::Fresh).unwrap();
    state.apply(
        t,
        Ok(response(json!({
            "documents": [],
            "aggregations": {"doctype_counts": {"Report": 4}, "branchtype_counts": {"London": 2}}
        }))),
    );
    assert_eq!(state.facet_counts(Facet::DocType).unwrap().get("Report"), Some(&4));
    assert_eq!(state.facet_counts(Facet::Branch).unwrap().get("London"), Some(&2));
    assert!(state.facet_counts(Facet::Extension).unwrap().is_empty());
}

#[test]
fn fresh_search_without_aggregations_resets_counts() {
    let mut state = SearchState::default();
    let t = state.begin(RequestKind::Fresh).unwrap();
    state.apply(t, Ok(response(json!({"documents": [], "aggregations": {"doctype_counts": {"Report": 4}}}))));

    let t = state.begin(RequestKind::Fresh).unwrap();
    state.apply(t, Ok(page(&[], None)));
    assert!(state.facet_counts(Facet::DocType).unwrap().is_empty());
}

#[test]
fn load_more_and_attachment_keep_counts() {
    let mut state = SearchState::default();
    let t = state.begin(RequestKind::Fresh).unwrap();
    state.apply(
        t,
        Ok(response(json!({
            "documents": [{"PropId": "a"}],
            "next_search_after": ["a"],
            "aggregations": {"doctype_counts": {"Report": 4}}
        }))),
    );
    let before = state.facet_counts.clone();

    let t = state.begin(RequestKind::LoadMore).unwrap();
    state.apply(t, Ok(page(&["b"], None)));
    assert_eq!(state.facet_counts, before);

    let t = state.begin(RequestKind::AttachmentLookup).unwrap();
    state.apply(
        t,
        Ok(response(json!({"documents": [], "aggregations": {"doctype_counts": {"Memo": 1}}}))),
    );
    assert_eq!(state.facet_counts, before);
}

#[test]
fn aggregations_default_has_no_counts() {
    assert_eq!(Aggregations::default().counts(Facet::Branch), None);
}

#[test]
fn page_size_follows_view() {
    let mut inputs = SearchInputs { query: SearchQuery::from_url_param("x"), ..Default::default() };
    assert_eq!(inputs.page_size(), PAGE_SIZE);

    inputs.view = ViewMode::Grid;
    inputs.grid_page_size = 500;
    let BackendRequest::Search(req) = build_request(&inputs.request_input(None, None)).unwrap() else {
        panic!("expected a search request");
    };
    assert_eq!(req.size, 500);
}

#[test]
fn facet_list_keeps_selected_values() {
    let mut filters = FilterSelection::default();
    filters.toggle(Facet::DocType, "Memo");
    let counts: FacetCounts = [("Report".to_string(), 3), ("Letter".to_string(), 7)].into_iter().collect();

    let list = facet_value_list(Some(&counts), &filters, Facet::DocType);
    assert_eq!(
        list,
        vec![("Letter".to_string(), 7), ("Report".to_string(), 3), ("Memo".to_string(), 0)]
    );
    assert_eq!(facet_value_list(None, &filters, Facet::DocType), vec![("Memo".to_string(), 0)]);
}

#[test]
fn document_url_dispatches_only_the_attachment_lookup() {
    let params = SearchUrlParams::parse("q=%5B%22tax%22%5D&PropId=A-1&ParentPropId=P-1&isAttachment=true");
    let inputs = SearchInputs { query: params.query(), ..Default::default() };
    let Dispatch::Send(kind, input) = on_inputs_changed(&params, &inputs) else {
        panic!("expected a request");
    };
    assert_eq!(kind, RequestKind::AttachmentLookup);
    assert_eq!(input.cursor, None);
    assert_eq!(input.attachment.map(|a| a.prop_id), Some("A-1".to_string()));
}

#[test]
fn grid_page_size_change_dispatches_a_fresh_search() {
    let params = SearchUrlParams::parse("type=any&q=tax");
    let mut inputs = SearchInputs { query: params.query(), view: ViewMode::Grid, ..Default::default() };
    let before = on_inputs_changed(&params, &inputs);

    inputs.grid_page_size = 1000;
    let after = on_inputs_changed(&params, &inputs);
    assert_ne!(before, after);
    let Dispatch::Send(RequestKind::Fresh, input) = after else {
        panic!("expected a fresh search");
    };
    assert_eq!(input.cursor, None);
    let BackendRequest::Search(req) = build_request(&input).unwrap() else {
        panic!("expected a search request");
    };
    assert_eq!(req.size, 1000);
}

#[test]
fn switching_view_changes_the_dispatched_size() {
    let params = SearchUrlParams::parse("q=tax");
    let mut inputs = SearchInputs { query: params.query(), grid_page_size: 500, ..Default::default() };
    let Dispatch::Send(_, reader) = on_inputs_changed(&params, &inputs) else {
        panic!("expected a request");
    };
    inputs.view = ViewMode::Grid;
    let Dispatch::Send(_, grid) = on_inputs_changed(&params, &inputs) else {
        panic!("expected a request");
    };
    assert_eq!(reader.page_size, PAGE_SIZE);
    assert_eq!(grid.page_size, 500);
}

#[test]
fn query_gate_decides_the_dispatch() {
    let params = SearchUrlParams::parse("q=%5B%5D");
    let inputs = SearchInputs { query: params.query(), ..Default::default() };
    assert_eq!(on_inputs_changed(&params, &inputs), Dispatch::ShowInvalidQuery);

    let params = SearchUrlParams::parse("");
    let inputs = SearchInputs { query: params.query(), ..Default::default() };
    assert_eq!(on_inputs_changed(&params, &inputs), Dispatch::Clear);
}
