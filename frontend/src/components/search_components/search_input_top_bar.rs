use dioxus::prelude::*;
use common::search_state::ViewMode;
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdSearch, MdViewList, MdViewModule}, md_content_icons::MdClear}};
use crate::pages::search_page::SearchController;


#[component]
pub fn SearchInputTopBar() -> Element {
    let controller = use_context::<SearchController>();
    let url_params = controller.url_params;
    let set_query = controller.set_query;
    let original_query = use_memo(move || url_params.read().query());

    let mut new_term = use_signal(|| "".to_string());
    // when url changes, the typed term is dropped, as it is not reset by navigation.
    use_effect(move || {
        let _ = original_query.read();
        new_term.set("".to_string());
    });
    let search_button_color = use_memo(move || if new_term.read().trim().is_empty() { "#6B7280" } else { "blue" });
    let trigger_search = move |_: ()| {
        let query = original_query.peek().with_term(&new_term.peek());
        if query != *original_query.peek() {
            set_query(query);
        }
    };
    let search_oninput = move |event: Event<FormData>| {
        new_term.set(event.value());
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
                box-sizing: border-box;
            ",

            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    trigger_search(())
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Add a search term",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 20px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{new_term}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
        SearchTermChips {}
        div { style: "flex-grow: 1;" }
        ViewToggle {}
    }
}

#[component]
fn SearchTermChips() -> Element {
    let controller = use_context::<SearchController>();
    let url_params = controller.url_params;
    let set_query = controller.set_query;
    let query = use_memo(move || url_params.read().query());

    rsx! {
        div {
            id: "x-search-input-term-chips-wrapper",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                margin: 0px 16px;
                overflow-x: auto;
                min-width: 0;
            ",
            for (index, term) in query().terms.into_iter().enumerate() {
                div {
                    key: "{index}-{term}",
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 4px;
                        border: 2px solid rgba(0,0,255,0.6);
                        border-radius: 1000px;
                        background-color: white;
                        padding: 4px 6px 4px 12px;
                        font-size: 15px;
                        line-height: 24px;
                        white-space: nowrap;
                        flex-shrink: 0;
                    ",
                    "{term}"
                    button {
                        class: "hoover4-hover-shadow-background",
                        style: "
                            border: none;
                            background: none;
                            cursor: pointer;
                            display: flex;
                            align-items: center;
                            border-radius: 1000px;
                        ",
                        title: "Remove term",
                        onclick: move |_| {
                            set_query(query.peek().without_term(index));
                        },
                        Icon { icon: MdClear, style: "width: 16px; height: 16px;" }
                    }
                }
            }
        }
    }
}

#[component]
fn ViewToggle() -> Element {
    let controller = use_context::<SearchController>();
    let mut view = controller.view;

    rsx! {
        div {
            id: "x-search-view-toggle",
            style: "
                display: flex;
                flex-direction: row;
                gap: 2px;
                margin-right: 16px;
                flex-shrink: 0;
            ",
            ViewToggleButton {
                active: view() == ViewMode::Reader,
                label: "Reader View",
                onclick: move |_| view.set(ViewMode::Reader),
                Icon { icon: MdViewList, style: "width: 24px; height: 24px;" }
            }
            ViewToggleButton {
                active: view() == ViewMode::Grid,
                label: "Grid View",
                onclick: move |_| view.set(ViewMode::Grid),
                Icon { icon: MdViewModule, style: "width: 24px; height: 24px;" }
            }
        }
    }
}

#[component]
fn ViewToggleButton(active: bool, label: String, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    let (background, color) = if active { ("#4F46E5", "white") } else { ("#E5E7EB", "black") };
    rsx! {
        button {
            title: "{label}",
            style: "
                width: 40px;
                height: 40px;
                cursor: pointer;
                border: none;
                border-radius: 8px;
                background: {background};
                color: {color};
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
