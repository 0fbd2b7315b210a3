//! Overlay dialog used for inline document previews.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdOpenInNew, md_navigation_icons::MdClose}};

/// Clicking the overlay or either close button calls `on_close`. While
/// `loading` is set the body shows a placeholder instead of `children`.
#[component]
pub fn Modal(
    open: ReadSignal<bool>,
    on_close: Callback<()>,
    title: ReadSignal<String>,
    loading: ReadSignal<bool>,
    view_url: ReadSignal<Option<String>>,
    children: Element,
) -> Element {
    if !open() {
        return rsx! {};
    }
    rsx! {
        div {
            id: "x-modal-overlay",
            style: "
                position: fixed;
                top: 0px;
                left: 0px;
                width: 100vw;
                height: 100vh;
                background: rgba(0, 0, 0, 0.6);
                z-index: 2000;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 16px;
                box-sizing: border-box;
            ",
            onclick: move |_e| {
                on_close.call(());
            },
            div {
                id: "x-modal-window",
                style: "
                    background: white;
                    border-radius: 8px;
                    box-shadow: 0 0 20px 0 rgba(0, 0, 0, 0.4);
                    width: 100%;
                    max-width: 1150px;
                    max-height: 90vh;
                    display: flex;
                    flex-direction: column;
                ",
                onclick: move |e| {
                    e.stop_propagation();
                },

                // header
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 10px;
                        padding: 14px 16px;
                        border-bottom: 1px solid #E5E7EB;
                    ",
                    h2 {
                        style: "
                            font-size: 20px;
                            font-weight: 500;
                            margin: 0;
                            overflow: hidden;
                            text-overflow: ellipsis;
                            white-space: nowrap;
                            min-width: 0;
                        ",
                        title: "{title}",
                        "{title}"
                    }
                    div { style: "flex-grow: 1;" }
                    if let Some(view_url) = view_url() {
                        a {
                            class: "hoover4-hover-shadow-background",
                            style: "color: black; display: flex; align-items: center; padding: 4px; border-radius: 4px;",
                            href: "{view_url}",
                            target: "_blank",
                            title: "Open in new tab",
                            Icon { icon: MdOpenInNew, style: "width: 22px; height: 22px;" }
                        }
                    }
                    button {
                        class: "hoover4-hover-shadow-background",
                        style: "border: none; background: none; cursor: pointer; display: flex; align-items: center; padding: 4px; border-radius: 4px;",
                        aria_label: "Close modal",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: MdClose, style: "width: 24px; height: 24px;" }
                    }
                }

                // body
                div {
                    id: "x-modal-body",
                    style: "padding: 20px; flex-grow: 1; overflow-y: auto;",
                    if loading() {
                        div {
                            style: "display: flex; justify-content: center; align-items: center; height: 128px; color: #4B5563;",
                            "Loading preview..."
                        }
                    } else {
                        {children}
                    }
                }

                // footer
                div {
                    style: "
                        display: flex;
                        justify-content: flex-end;
                        padding: 14px 16px;
                        border-top: 1px solid #E5E7EB;
                    ",
                    button {
                        style: "
                            cursor: pointer;
                            border: none;
                            border-radius: 6px;
                            background: #3B82F6;
                            color: white;
                            padding: 8px 16px;
                            font-size: 15px;
                        ",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
