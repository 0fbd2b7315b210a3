//! View and Download buttons of a single document.

use common::document_preview::{preview_error_html, proxy_url, DocumentAction, PreviewStrategy};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdVisibility, md_file_icons::MdFileDownload}};
use gloo_timers::future::TimeoutFuture;

use crate::{api::search_api::fetch_document_preview, components::modal::Modal};

/// Time before the View button re-enables after a new-tab open.
const NEW_TAB_COOLDOWN_MS: u32 = 500;

fn server_error_message(err: ServerFnError) -> String {
    match err {
        ServerFnError::ServerError { message, .. } => message,
        other => other.to_string(),
    }
}

fn notify_popup_blocked() {
    let toast_api = dioxus_primitives::toast::consume_toast();
    toast_api.error(
        "Could not open the document.".to_string(),
        dioxus_primitives::toast::ToastOptions::new()
            .description("The new tab was blocked. Please allow pop-ups for this site.")
            .duration(std::time::Duration::from_secs(15))
            .permanent(false),
    );
}

/// Opens `url` in a new browser tab. `false` when the browser refused.
fn open_in_new_tab(url: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    matches!(window.open_with_url_and_target(url, "_blank"), Ok(Some(_)))
}

#[component]
pub fn DocumentActions(file_path: ReadSignal<Option<String>>, file_name: ReadSignal<String>) -> Element {
    let mut is_busy = use_signal(|| false);
    let mut modal_open = use_signal(|| false);
    let mut modal_loading = use_signal(|| false);
    let mut modal_content = use_signal(|| "".to_string());

    let Some(path) = file_path() else {
        return rsx! {
            p {
                class: "x-document-actions-error",
                style: "color: darkred; font-size: 14px; margin: 0;",
                "File path is missing, cannot open document."
            }
        };
    };
    let view_url = proxy_url(&path, DocumentAction::View);
    let download_url = proxy_url(&path, DocumentAction::Download);

    let open_document = {
        let path = path.clone();
        let view_url = view_url.clone();
        move |_: MouseEvent| {
            if is_busy() {
                return;
            }
            is_busy.set(true);
            match PreviewStrategy::for_file_name(&file_name.peek()) {
                PreviewStrategy::InlineHtml => {
                    modal_content.set("".to_string());
                    modal_loading.set(true);
                    modal_open.set(true);
                    let path = path.clone();
                    spawn(async move {
                        let html = match fetch_document_preview(path).await {
                            Ok(html) => html,
                            Err(e) => {
                                let message = server_error_message(e);
                                tracing::error!("error fetching document preview: {message}");
                                preview_error_html(&message)
                            }
                        };
                        modal_content.set(html);
                        modal_loading.set(false);
                        is_busy.set(false);
                    });
                }
                PreviewStrategy::NewTab => {
                    if !open_in_new_tab(&view_url) {
                        tracing::warn!("new tab for {view_url} was blocked");
                        notify_popup_blocked();
                    }
                    spawn(async move {
                        TimeoutFuture::new(NEW_TAB_COOLDOWN_MS).await;
                        is_busy.set(false);
                    });
                }
            }
        }
    };

    rsx! {
        div {
            class: "x-document-actions",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
            ",
            button {
                class: "hoover4-hover-shadow-background",
                style: "
                    height: 40px;
                    cursor: pointer;
                    border: 1px solid #000;
                    border-radius: 8px;
                    background: white;
                    color: black;
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    padding: 0px 10px;
                    font-size: 15px;
                ",
                disabled: is_busy(),
                onclick: open_document,
                Icon { icon: MdVisibility, style: "width: 22px; height: 22px;" }
                if is_busy() { "Preparing..." } else { "View" }
            }
            a {
                class: "hoover4-hover-shadow-background",
                style: "
                    height: 40px;
                    box-sizing: border-box;
                    cursor: pointer;
                    border: 1px solid #000;
                    border-radius: 8px;
                    background: white;
                    color: black;
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    padding: 0px 10px;
                    font-size: 15px;
                    text-decoration: none;
                ",
                href: "{download_url}",
                download: "{file_name}",
                Icon { icon: MdFileDownload, style: "width: 22px; height: 22px;" }
                "Download"
            }
        }
        Modal {
            open: modal_open,
            on_close: move |_| {
                modal_open.set(false);
                modal_content.set("".to_string());
            },
            title: file_name(),
            loading: modal_loading,
            view_url: Some(view_url.clone()),
            div {
                class: "x-document-preview",
                dangerous_inner_html: "{modal_content}",
            }
        }
    }
}
