//! File server calls and module exports.

mod file_server_client;
pub use file_server_client::FileServerClient;

use crate::config::get_config;

/// Converted HTML preview of a document, for the preview modal.
pub async fn fetch_document_preview(file_path: String) -> anyhow::Result<String> {
    FileServerClient::new(&get_config().file_server_url).fetch_preview_html(&file_path).await
}
