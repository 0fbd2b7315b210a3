//! Search result item card component.

use dioxus::prelude::*;
use common::document::{display_date, Document};
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdDescription, md_editor_icons::MdInsertDriveFile}};

use crate::components::{
    document_actions::DocumentActions,
    search_components::card_action_buttons::{DocCardActionButtonAttachments, DocCardActionButtonCopyLink},
};

#[component]
pub fn SearchResultItemCard(document: ReadSignal<Document>, item_index: usize) -> Element {
    let doc = document.read().clone();
    let file_name = doc.display_name();
    let file_path = doc.file_path();
    let lookup = doc.attachment_lookup();
    let doc_type = doc.doc_type.clone().unwrap_or_default();
    let from = doc.from.clone().unwrap_or_default();
    let to = doc.to.clone().unwrap_or_default();
    let report_number = doc.report_number.clone().unwrap_or_default();
    let document_date = doc.document_date.as_ref().map(display_date).unwrap_or_default();
    let ingestion_date = doc.ingestion_date.as_ref().map(display_date).unwrap_or_default();

    rsx! {
        div {
            class: "x-search-result-card",
            style: "
                display: flex;
                flex-direction: column;
                align-items: stretch;
                gap: 7px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                width: calc(100% - 16px);
                box-sizing: border-box;
            ",
            // Row 1: INDEX - ICON - TITLE - SPACER - DOCTYPE
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    width: 100%;
                    padding: 1px;
                ",
                span {
                    style: "font-size: 20px; font-weight: 200; color: rgba(0, 0, 0, 0.5); padding: 1px 4px; border-radius: 4px; margin: -4px",
                    "{item_index}."
                }
                FileTypeIcon {}
                div {
                    style: "
                        font-size: 20px;
                        line-height: 28px;
                        font-weight: 400;
                        color: rgb(0, 0, 0);
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                        min-width: 0;
                    ",
                    title: "{file_name}",
                    "{file_name}"
                }

                // SPACER
                div {
                    style: "
                        flex: 1 1 auto;
                    ",
                }
                if !doc_type.is_empty() {
                    Icon { icon: MdDescription, style: "width: 18px; height: 18px; color: rgba(0, 0, 0, 0.5); flex-shrink: 0;" }
                    span {
                        style: "
                            font-size: 18px;
                            line-height: 28px;
                            font-weight: 300;
                            color: rgba(0, 0, 0, 0.5);
                            font-style: italic;
                            white-space: nowrap;
                        ",
                        "{doc_type}"
                    }
                }
            }
            // Row 2: METADATA
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    gap: 4px 18px;
                    font-size: 14px;
                    color: rgb(75, 87, 112);
                ",
                MetadataItem { label: "From", value: from }
                MetadataItem { label: "To", value: to }
                MetadataItem { label: "Report", value: report_number }
                MetadataItem { label: "Document date", value: document_date }
                MetadataItem { label: "Ingested", value: ingestion_date }
            }
            // Row 3: TEXT SNIPPET
            div {
                style: "
                    font-size: 16px;
                    line-height: 23px;
                    font-weight: 400;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    display: -webkit-box;
                    -webkit-line-clamp: 4;
                    -webkit-box-orient: vertical;
                    min-width: 0;
                ",
                "{doc.text}"
            }
            // Row 4: BUTTONS
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                ",
                DocumentActions { file_path, file_name: file_name.clone() }
                div { style: "flex: 1 1 auto;" }
                DocCardActionButtonAttachments { lookup: lookup.clone() }
                DocCardActionButtonCopyLink { lookup }
            }
        }
    }
}

#[component]
fn MetadataItem(label: String, value: String) -> Element {
    if value.is_empty() {
        return rsx! {};
    }
    rsx! {
        span {
            strong { style: "font-weight: 500;", "{label}: " }
            "{value}"
        }
    }
}

#[component]
fn FileTypeIcon() -> Element {
    rsx! {
        div {
            style: "
                width: 24px;
                height: 24px;
                background: transparent;
                color: rgba(0, 0, 0, 0.5);
                display: flex;
                align-items: center;
                justify-content: center;
                border-radius: 4px;
                flex-shrink: 0;
            ",
            Icon {
                icon: MdInsertDriveFile,
                style: "width: 18px; height: 18px;"
            }
        }
    }
}
