//! Sidebar with facet checkboxes, date filters and the search type.

use dioxus::prelude::*;
use common::{filter_selection::Facet, search_query::SearchMode, search_state::facet_value_list};
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank, MdRadioButtonChecked, MdRadioButtonUnchecked}};

use crate::pages::search_page::SearchController;


#[component]
pub fn FiltersSidebar() -> Element {
    let controller = use_context::<SearchController>();
    let clear_all = controller.clear_all;
    let opacity = use_memo(move || if controller.state.read().loading { 0.6 } else { 1.0 });

    rsx! {
        div {
            id: "x-filters-sidebar",
            style: "
                display: flex;
                flex-direction: column;
                gap: 18px;
                padding: 16px;
                opacity: {opacity()};
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center;",
                h2 { style: "font-size: 22px; font-weight: 500; margin: 0;", "Filters" }
                div { style: "flex-grow: 1;" }
                button {
                    class: "hoover4-hover-shadow-background",
                    style: "
                        cursor: pointer;
                        border: 1px solid rgba(0,0,0,0.5);
                        border-radius: 8px;
                        background: white;
                        padding: 4px 10px;
                        font-size: 14px;
                    ",
                    onclick: move |_| clear_all(()),
                    "Clear all filters"
                }
            }
            SearchModeSelector {}
            DateFilters {}
            for facet in Facet::ALL {
                FacetSection { key: "{facet:?}", facet }
            }
        }
    }
}

#[component]
fn SearchModeSelector() -> Element {
    let controller = use_context::<SearchController>();
    let url_params = controller.url_params;
    let set_mode = controller.set_mode;
    let mode = use_memo(move || url_params.read().mode);

    rsx! {
        div {
            SidebarHeading { "Search Type" }
            for (value, label) in [(SearchMode::Any, "Any term"), (SearchMode::All, "All terms")] {
                div {
                    key: "{value}",
                    class: "x-facet-list-item",
                    style: "
                        display: flex;
                        flex-direction: row;
                        gap: 10px;
                        cursor: pointer;
                        padding: 4px;
                        align-items: center;
                    ",
                    onclick: move |_| set_mode(value),
                    if mode() == value {
                        Icon { icon: MdRadioButtonChecked, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
                    } else {
                        Icon { icon: MdRadioButtonUnchecked, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
                    }
                    "{label}"
                }
            }
        }
    }
}

#[component]
fn DateFilters() -> Element {
    let controller = use_context::<SearchController>();
    let mut filters = controller.filters;
    let year = use_memo(move || filters.read().year.clone().unwrap_or_default());
    let from_date = use_memo(move || filters.read().from_date.clone().unwrap_or_default());
    let to_date = use_memo(move || filters.read().to_date.clone().unwrap_or_default());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            SidebarHeading { "Date" }
            label {
                style: "display: flex; flex-direction: column; gap: 2px; font-size: 14px;",
                "Year"
                input {
                    r#type: "number",
                    placeholder: "e.g. 2022",
                    style: "padding: 4px; font-size: 16px;",
                    value: "{year}",
                    onchange: move |e| filters.write().set_year(&e.value()),
                }
            }
            label {
                style: "display: flex; flex-direction: column; gap: 2px; font-size: 14px;",
                "From"
                input {
                    r#type: "date",
                    style: "padding: 4px; font-size: 16px;",
                    value: "{from_date}",
                    onchange: move |e| filters.write().set_from_date(&e.value()),
                }
            }
            label {
                style: "display: flex; flex-direction: column; gap: 2px; font-size: 14px;",
                "To"
                input {
                    r#type: "date",
                    style: "padding: 4px; font-size: 16px;",
                    value: "{to_date}",
                    onchange: move |e| filters.write().set_to_date(&e.value()),
                }
            }
        }
    }
}

#[component]
fn FacetSection(facet: Facet) -> Element {
    let controller = use_context::<SearchController>();
    let state = controller.state;
    let filters = controller.filters;
    let values = use_memo(move || {
        let state = state.read();
        facet_value_list(state.facet_counts(facet), &filters.read(), facet)
    });

    rsx! {
        div {
            SidebarHeading { "{facet.display_name()}" }
            if values.read().is_empty() {
                div { style: "font-size: 14px; color: rgba(28, 33, 45, 0.6); padding: 4px;", "No values" }
            }
            ul {
                style: "list-style: none; padding: 0; margin: 0;",
                for (value, count) in values() {
                    li {
                        key: "{value}",
                        FacetCheckbox { facet, facet_value: value.clone(), result_count: count }
                    }
                }
            }
        }
    }
}

#[component]
fn FacetCheckbox(facet: Facet, facet_value: ReadSignal<String>, result_count: ReadSignal<u64>) -> Element {
    let controller = use_context::<SearchController>();
    let mut filters = controller.filters;
    let is_checked = use_memo(move || filters.read().is_selected(facet, &facet_value.read()));
    rsx! {

        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 2px;
                align-items: center;
            ",
            onclick: move |_e| {
                filters.write().toggle(facet, &facet_value.peek());
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 24px;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{facet_value}"
            }

            div { style: "flex: 1 1 auto;", }

            div {
                style: "
                    font-size: 16px;
                    line-height: 24px;
                    color: rgba(28, 33, 45, 0.7);
                    flex-shrink: 0;
                ",
                "{result_count}"
            }
        }
    }
}

#[component]
fn SidebarHeading(children: Element) -> Element {
    rsx! {
        h3 {
            style: "
                font-size: 16px;
                font-weight: 500;
                color: rgb(75, 87, 112);
                border-bottom: 1px solid rgb(75, 87, 112);
                margin: 0 0 6px 0;
                padding-bottom: 2px;
            ",
            {children}
        }
    }
}
