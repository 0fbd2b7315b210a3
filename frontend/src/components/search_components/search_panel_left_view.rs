//! Reader view: one card per document and a load-more button.

use dioxus::prelude::*;

use crate::{
    components::{search_components::search_result_item_card::SearchResultItemCard, suspend_boundary::LoadingIndicator},
    pages::search_page::SearchController,
};

#[component]
pub fn SearchPanelLeftView() -> Element {
    rsx! {
        div {
            id: "x-search-panel-left-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 1px;
                margin: 1px;
                padding: 7px;
                padding-top: 0px;
                height: 100%;
                width: 100%;
                box-sizing: border-box;
            ",
            ResultListTitleRow {}

            div {
                style: "
                flex-grow: 1;
                width: 100%;
                max-height: calc(100% - 56px);
                ",
                SearchResultsView {}
            }
        }
    }
}

#[component]
fn ResultListTitleRow() -> Element {
    let controller = use_context::<SearchController>();
    let url_params = controller.url_params;
    let state = controller.state;
    let title = use_memo(move || match url_params.read().attachment_lookup() {
        Some(lookup) if lookup.is_attachment => "Parent document".to_string(),
        Some(_) => "Attachments".to_string(),
        None => {
            let count = state.read().documents.len();
            let more = if state.read().cursor.is_some() { "+" } else { "" };
            format!("{count}{more} documents")
        }
    });

    rsx! {
        div {
            id: "x-search-panel-left-title-row",
            style: "
                display: flex;
                flex-direction: row;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
                box-sizing: border-box;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112);  border-bottom: 1px solid rgb(75, 87, 112);",
                "{title}"
            }
        }
    }
}

#[component]
fn SearchResultsView() -> Element {
    let controller = use_context::<SearchController>();
    let state = controller.state;
    let load_more = controller.load_more;
    let error = use_memo(move || state.read().error.clone());
    let loading = use_memo(move || state.read().loading);
    let can_load_more = use_memo(move || state.read().can_load_more());
    let has_next_page = use_memo(move || state.read().cursor.is_some());
    let documents = use_memo(move || state.read().documents.clone());

    rsx! {
        ul {
            id: "x-search-panel-results-wrapper",
            style: "
                width: 100%;
                height: 100%;
                overflow-y: auto;
                list-style: none;
                padding: 0;
                margin: 0;
            ",
            if let Some(error) = error() {
                li {
                    p {
                        class: "x-search-error-message",
                        style: "color: darkred; font-size: 18px; border: 1px solid red; border-radius: 5px; padding: 10px; margin: 8px; background: white;",
                        "{error}"
                    }
                }
            }
            for (index, document) in documents().into_iter().enumerate() {
                li {
                    key: "{index}-{document.prop_id().unwrap_or_default()}",
                    SearchResultItemCard { document, item_index: index + 1 }
                }
            }
            if !loading() && error().is_none() && documents.read().is_empty() {
                li {
                    div {
                        style: "font-size: 18px; color: rgba(0, 0, 0, 0.5); padding: 16px;",
                        "No documents found."
                    }
                }
            }
            if loading() {
                li {
                    style: "display: flex; justify-content: center;",
                    LoadingIndicator {}
                }
            }
            if has_next_page() {
                li {
                    style: "display: flex; justify-content: center; padding: 12px;",
                    button {
                        class: "hoover4-hover-shadow-background",
                        style: "
                            cursor: pointer;
                            border: 1px solid #000;
                            border-radius: 8px;
                            background: white;
                            padding: 8px 24px;
                            font-size: 18px;
                        ",
                        disabled: !can_load_more(),
                        onclick: move |_| load_more(()),
                        "Load more"
                    }
                }
            }
        }
    }
}
