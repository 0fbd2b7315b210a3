use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::{MdFindInPage, MdSearch}};

use common::search_query::{SearchMode, SearchQuery};
use crate::routes::Route;

/// Entry point: one search box and the term mode. Everything else lives on
/// the search page.
#[component]
pub fn HomePage() -> Element {
    let mut term = use_signal(String::new);
    let mut mode = use_signal(SearchMode::default);

    let submit = move |_: ()| {
        let query = SearchQuery::default().with_term(&term.read());
        if query.is_empty() {
            return;
        }
        navigator().push(Route::search_page_from_query(query, mode()));
    };

    rsx! {
        Title { "Document Search" }
        div {
            id: "x-home-search-entry",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 18px;
                height: 100%;
                background: #F8FCFF;
            ",
            div {
                style: "display: flex; align-items: center; gap: 10px; font-size: 34px; color: rgb(75, 87, 112);",
                Icon { icon: MdFindInPage, style: "width: 40px; height: 40px;" }
                "Document Search"
            }
            form {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    width: 560px;
                    max-width: 90vw;
                    padding: 8px 12px;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    border-radius: 9999px;
                    background: white;
                ",
                onsubmit: move |e| {
                    e.prevent_default();
                    submit(());
                },
                Icon { icon: MdSearch, style: "width: 22px; height: 22px; color: #6B7280;" }
                input {
                    r#type: "text",
                    placeholder: "Keyword, or \"exact phrase\"",
                    autofocus: true,
                    style: "flex: 1; border: none; outline: none; font-size: 17px;",
                    value: "{term}",
                    oninput: move |e| term.set(e.value()),
                }
                select {
                    style: "border: none; font-size: 15px; background: transparent;",
                    onchange: move |e| mode.set(e.value().parse().unwrap_or_default()),
                    option { value: "any", selected: mode() == SearchMode::Any, "Any term" }
                    option { value: "all", selected: mode() == SearchMode::All, "All terms" }
                }
            }
        }
    }
}
