//! Suspense wrapper and the loading placeholder of the search page.

use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Shows a loading placeholder while children are suspended, and catches
/// their render errors.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(#[props(default = "Loading documents...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "x-loading-indicator",
            style: "color: rgb(75, 87, 112); font-size: 20px; border: 1px solid rgb(75, 87, 112); padding: 10px; border-radius: 5px; margin: 15px; background: white;",
            "{label}"
        }
    }
}
