//! Search result card action buttons component.

use common::search_request::AttachmentLookup;
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdOpenInNew, md_editor_icons::MdInsertLink}};

use crate::routes::Route;

/// Opens the attachment (or parent) page of the document in a new tab.
#[component]
pub fn DocCardActionButtonAttachments(lookup: ReadSignal<AttachmentLookup>) -> Element {
    let label = if lookup.read().is_attachment { "Open parent document" } else { "Open attachments" };
    rsx! {
        a {
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
                justify-content: center;
                gap: 6px;
                font-size: 15px;
                padding: 0px 10px;
                margin: 1px;
                text-decoration: none;
            ",
            target: "_blank",
            class: "hoover4-hover-shadow-background",
            title: "{label}",
            href: Route::attachment_page(&lookup.read()).to_string(),
            Icon {
                icon: MdOpenInNew,
                style: "width: 22px; height: 22px;"
            }
            "{label}"
        }
    }
}

/// Copies an absolute link to the document's attachment page.
#[component]
pub fn DocCardActionButtonCopyLink(lookup: ReadSignal<AttachmentLookup>) -> Element {
    let copy_link = move |e: MouseEvent| {
        e.stop_propagation();
        let Some(window) = web_sys::window() else { return };
        let origin = window.location().origin().unwrap_or_default();
        let url = format!("{origin}{}", Route::attachment_page(&lookup.peek()));
        let _r = window.navigator().clipboard().write_text(&url);
        tracing::info!("link copied to clipboard: {url}");

        dioxus_primitives::toast::consume_toast().info(
            "Link copied to clipboard.".to_string(),
            dioxus_primitives::toast::ToastOptions::new()
                .description("The document link has been copied to your clipboard.")
                .duration(std::time::Duration::from_secs(15))
                .permanent(false),
        );
    };
    rsx! {
        button {
            style: "
                width: 40px;
                height: 40px;
                cursor: pointer;
                border: 1px solid #000;
                border-radius: 8px;
                background: white;
                color: black;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 1px;
                margin: 1px;
            ",
            class: "hoover4-hover-shadow-background",
            title: "Copy document link",
            onclick: copy_link,
            Icon {
                icon: MdInsertLink,
                style: "width: 24px; height: 24px;"
            }
        }
    }
}
