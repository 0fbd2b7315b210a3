//! Grid view: a table of the loaded documents with a global filter, a page
//! size selector and a metadata panel for the selected row.
//!
//! Filtering is client side and only looks at the rows already loaded.
//! Changing the page size starts a fresh search.

use common::{
    document::{value_text, Document},
    grid::{filter_rows, grid_columns},
    search_const::GRID_PAGE_SIZE_OPTIONS,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::{
    components::{document_actions::DocumentActions, suspend_boundary::LoadingIndicator},
    pages::search_page::SearchController,
};

#[component]
pub fn GridView() -> Element {
    let controller = use_context::<SearchController>();
    let state = controller.state;
    let documents = use_memo(move || state.read().documents.clone());
    let columns = use_memo(move || grid_columns(&documents.read()));
    let mut global_filter = use_signal(|| "".to_string());
    let visible_rows = use_memo(move || filter_rows(&documents.read(), &columns.read(), &global_filter.read()));
    let mut selected_row = use_signal(|| None::<usize>);

    // a new result set invalidates the selection
    use_effect(move || {
        let _ = documents.read();
        selected_row.set(None);
    });

    let selected_document = use_memo(move || selected_row().and_then(|i| documents.read().get(i).cloned()));

    rsx! {
        div {
            id: "x-grid-view-wrapper",
            style: "
                display: flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 10px;
                    flex: 1;
                    min-width: 0;
                    padding: 16px;
                    box-sizing: border-box;
                ",
                div {
                    id: "x-grid-toolbar",
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 16px;
                    ",
                    input {
                        r#type: "text",
                        placeholder: "Filter rows...",
                        style: "
                            padding: 6px 10px;
                            font-size: 16px;
                            border: 1px solid rgba(101, 101, 101, 0.8);
                            border-radius: 6px;
                            width: 320px;
                        ",
                        value: "{global_filter}",
                        oninput: move |e| global_filter.set(e.value()),
                    }
                    div { style: "flex-grow: 1;" }
                    span {
                        style: "font-size: 15px; color: rgb(75, 87, 112);",
                        "{visible_rows.read().len()} of {documents.read().len()} rows"
                    }
                    PageSizeSelector {}
                }
                if let Some(error) = state.read().error.clone() {
                    p {
                        class: "x-search-error-message",
                        style: "color: darkred; font-size: 16px; border: 1px solid red; border-radius: 5px; padding: 10px; margin: 0; background: white;",
                        "{error}"
                    }
                }
                div {
                    style: "
                        flex: 1;
                        overflow: auto;
                        border: 1px solid #D1D5DB;
                        border-radius: 6px;
                        background: white;
                    ",
                    table {
                        style: "border-collapse: collapse; width: 100%; font-size: 14px;",
                        thead {
                            tr {
                                style: "background: #E5E7EB; position: sticky; top: 0px;",
                                th { style: "padding: 8px;" }
                                for column in columns() {
                                    th {
                                        key: "{column}",
                                        style: "padding: 8px 16px; text-align: left; font-weight: 600; white-space: nowrap;",
                                        "{column}"
                                    }
                                }
                            }
                        }
                        tbody {
                            for index in visible_rows() {
                                GridRow {
                                    key: "{index}",
                                    document: documents.read()[index].clone(),
                                    columns: columns(),
                                    selected: selected_row() == Some(index),
                                    onselect: move |_| {
                                        let next = if selected_row() == Some(index) { None } else { Some(index) };
                                        selected_row.set(next);
                                    },
                                }
                            }
                            if visible_rows.read().is_empty() {
                                tr {
                                    td {
                                        colspan: "{columns.read().len() + 1}",
                                        style: "padding: 32px; text-align: center; color: #6B7280;",
                                        if state.read().loading {
                                            LoadingIndicator {}
                                        } else {
                                            "No records found."
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(document) = selected_document() {
                MetadataPanel {
                    document,
                    on_close: move |_| selected_row.set(None),
                }
            }
        }
    }
}

#[component]
fn GridRow(document: ReadSignal<Document>, columns: Vec<String>, selected: bool, onselect: EventHandler<MouseEvent>) -> Element {
    let background = if selected { "#4096FF33" } else { "white" };
    rsx! {
        tr {
            class: "x-grid-row",
            style: "background: {background}; border-bottom: 1px solid #E5E7EB; cursor: pointer;",
            onclick: move |e| onselect.call(e),
            td {
                style: "padding: 8px;",
                input { r#type: "checkbox", checked: selected, readonly: true }
            }
            for column in columns {
                td {
                    key: "{column}",
                    style: "padding: 8px 16px; white-space: nowrap;",
                    "{document.read().cell_text(&column)}"
                }
            }
        }
    }
}

#[component]
fn PageSizeSelector() -> Element {
    let controller = use_context::<SearchController>();
    let mut grid_page_size = controller.grid_page_size;
    let loading = use_memo(move || controller.state.read().loading);

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 6px; font-size: 15px;",
            "Page size"
            select {
                style: "padding: 4px; font-size: 15px;",
                disabled: loading(),
                onchange: move |e| {
                    if let Ok(size) = e.value().parse::<u64>() {
                        grid_page_size.set(size);
                    }
                },
                for size in GRID_PAGE_SIZE_OPTIONS {
                    option {
                        key: "{size}",
                        value: "{size}",
                        selected: grid_page_size() == size,
                        "{size}"
                    }
                }
            }
        }
    }
}

#[component]
fn MetadataPanel(document: ReadSignal<Document>, on_close: Callback<()>) -> Element {
    let doc = document.read().clone();
    let file_name = doc.display_name();
    let file_path = doc.file_path();
    let highlights = doc.extra.get("highlighted_text").map(value_text).unwrap_or_default();
    let fields = doc
        .fields()
        .into_iter()
        .filter(|(key, _)| key != "highlighted_text")
        .map(|(key, _)| {
            let text = doc.cell_text(&key);
            (key, text)
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            id: "x-grid-metadata-panel",
            style: "
                width: 33%;
                min-width: 320px;
                height: 100%;
                overflow-y: auto;
                background: #F3F4F6;
                border-left: 1px solid #D1D5DB;
                padding: 16px;
                box-sizing: border-box;
                display: flex;
                flex-direction: column;
                gap: 10px;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center;",
                h3 { style: "font-size: 18px; font-weight: 600; margin: 0;", "Document Details" }
                div { style: "flex-grow: 1;" }
                button {
                    class: "hoover4-hover-shadow-background",
                    style: "border: none; background: none; cursor: pointer; display: flex; border-radius: 4px;",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: MdClose, style: "width: 22px; height: 22px;" }
                }
            }
            DocumentActions { file_path, file_name }
            if !highlights.is_empty() {
                div {
                    strong { "Highlights:" }
                    div {
                        class: "metadata-highlights",
                        style: "padding: 10px; background: white; border: 1px solid #D1D5DB; border-radius: 6px; font-size: 14px; line-height: 1.5;",
                        dangerous_inner_html: "{highlights}",
                    }
                }
            }
            for (key, text) in fields {
                div {
                    key: "{key}",
                    style: "font-size: 14px; word-break: break-word;",
                    strong { "{key}: " }
                    "{text}"
                }
            }
        }
    }
}
