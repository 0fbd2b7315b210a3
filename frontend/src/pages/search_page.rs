use dioxus::{logger::tracing, prelude::*};

use common::{
    filter_selection::FilterSelection,
    search_const::GRID_DEFAULT_PAGE_SIZE,
    search_query::{SearchMode, SearchQuery},
    search_request::{build_request, RequestInput},
    search_state::{on_inputs_changed, Dispatch, RequestKind, SearchInputs, SearchState, ViewMode},
    url_query::SearchUrlParams,
};
use crate::{
    api::search_api::run_search,
    components::{
        search_components::{
            filters_sidebar::FiltersSidebar, grid_view::GridView, search_input_top_bar::SearchInputTopBar,
            search_panel_left_view::SearchPanelLeftView,
        },
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::url_param::SearchUrl,
    routes::Route,
};


fn title_ellipsis(title: String) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title
    }
}

fn page_title(params: &SearchUrlParams) -> String {
    match params.attachment_lookup() {
        Some(lookup) if lookup.is_attachment => format!("Parent of {}", lookup.prop_id),
        Some(lookup) => format!("Attachments of {}", lookup.prop_id),
        None => params.query().terms.join(", "),
    }
}

/// Search page
#[component]
pub fn SearchPage(params: SearchUrl) -> Element {
    rsx! {
        Title { "Document Search: {title_ellipsis(page_title(&params.0))}" }
        SearchPageRootComponent {
            url_params: params.0.clone(),
        }
    }
}

/// Shared by every component of the search page.
#[derive(Clone, Copy)]
pub struct SearchController {
    pub url_params: ReadSignal<SearchUrlParams>,
    pub state: Signal<SearchState>,
    pub filters: Signal<FilterSelection>,
    pub view: Signal<ViewMode>,
    pub grid_page_size: Signal<u64>,
    pub load_more: Callback<()>,
    pub set_query: Callback<SearchQuery>,
    pub set_mode: Callback<SearchMode>,
    pub clear_all: Callback<()>,
}

#[component]
fn SearchPageRootComponent(url_params: ReadSignal<SearchUrlParams>) -> Element {
    let mut state = use_signal(SearchState::default);
    let mut filters = use_signal(FilterSelection::default);
    let view = use_signal(ViewMode::default);
    let grid_page_size = use_signal(|| GRID_DEFAULT_PAGE_SIZE);

    // Mode and query come from the url, the rest is page state.
    let inputs = use_memo(move || {
        let params = url_params.read();
        SearchInputs {
            query: params.query(),
            mode: params.mode,
            filters: filters.read().clone(),
            view: view(),
            grid_page_size: grid_page_size(),
        }
    });

    let run_request = use_callback(move |(kind, input): (RequestKind, RequestInput)| {
        let request = match build_request(&input) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("search request not sent: {e}");
                state.write().reject(kind, &e);
                return;
            }
        };
        let Some(ticket) = state.write().begin(kind) else {
            return;
        };
        tracing::info!("sending {:?} request to {}", kind, request.endpoint());
        spawn(async move {
            let outcome = run_search(request).await;
            if let Err(e) = &outcome {
                tracing::error!("search request failed: {e}");
            }
            if !state.write().apply(ticket, outcome) {
                tracing::debug!("dropped response of a superseded {:?} request", ticket.kind);
            }
        });
    });

    // In lookup mode only the url is subscribed, so page inputs do not rerun the lookup.
    use_effect(move || {
        let params = url_params.read().clone();
        let inputs = if params.attachment_lookup().is_some() { inputs.peek().clone() } else { inputs.read().clone() };
        match on_inputs_changed(&params, &inputs) {
            Dispatch::Send(kind, input) => run_request((kind, input)),
            Dispatch::ShowInvalidQuery => state.write().show_invalid_query(),
            Dispatch::Clear => state.write().clear(),
        }
    });

    let load_more = use_callback(move |_: ()| {
        if !state.peek().can_load_more() {
            return;
        }
        let cursor = state.peek().request_cursor(RequestKind::LoadMore);
        run_request((RequestKind::LoadMore, inputs.peek().request_input(cursor, None)));
    });
    let set_query = use_callback(move |query: SearchQuery| {
        let mode = url_params.peek().mode;
        navigator().push(Route::search_page_from_query(query, mode));
    });
    let set_mode = use_callback(move |mode: SearchMode| {
        if url_params.peek().mode == mode {
            return;
        }
        let query = url_params.peek().query();
        navigator().replace(Route::search_page_from_query(query, mode));
    });
    let clear_all = use_callback(move |_: ()| {
        filters.write().clear();
        set_mode(SearchMode::Any);
    });

    use_context_provider(move || SearchController {
        url_params,
        state,
        filters,
        view,
        grid_page_size,
        load_more,
        set_query,
        set_mode,
        clear_all,
    });

    rsx! {
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",
                SearchInputTopBar {}
            }

            div {
                id: "x-search-results-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                "#,
                if view() == ViewMode::Reader {
                    div {
                        id: "x-search-filters-left-panel",
                        style: "
                            height: 100%;
                            width: 320px;
                            min-width: 260px;
                            flex-shrink: 0;
                            background-color: white;
                            border-right: 1px solid rgb(164, 164, 164);
                            overflow-y: auto;
                        ",
                        SuspendWrapper { FiltersSidebar {} }
                    }
                    div {
                        id: "x-search-results-reader-panel",
                        style: "
                            height: 100%;
                            background-color: #ECEEF2;
                            flex-grow: 1;
                            min-width: 400px;
                        ",
                        SuspendWrapper { SearchPanelLeftView {} }
                    }
                } else {
                    div {
                        id: "x-search-results-grid-panel",
                        style: "
                            height: 100%;
                            width: 100%;
                            background-color: #ECEEF2;
                        ",
                        SuspendWrapper { GridView {} }
                    }
                }
            }
        }
    }
}
