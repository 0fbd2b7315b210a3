use anyhow::Context;
use common::document_preview::{
    DocumentAction, document_url, preview_body_or_placeholder, preview_failure_message,
};

use crate::http_utils::{get_http_client, status_text};

#[derive(Debug, Clone)]
pub struct FileServerClient {
    base_url: String,
    client: reqwest::Client,
}

impl FileServerClient {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.to_string(), client: get_http_client() }
    }

    pub fn url_for(&self, file_path: &str, action: DocumentAction) -> String {
        document_url(&self.base_url, file_path, action)
    }

    /// Fetches `action=view` output as text. Non-success statuses become an
    /// error carrying status, reason and the server's detail message.
    pub async fn fetch_preview_html(&self, file_path: &str) -> anyhow::Result<String> {
        anyhow::ensure!(!file_path.is_empty(), "File path is missing, cannot open document.");
        let url = self.url_for(file_path, DocumentAction::View);
        tracing::info!("fetching document preview: {}", url);

        let response = self.client.get(&url).send().await.context("Failed to reach file server")?;
        let status = response.status();
        let response_txt = response.text().await.context("Failed to read preview body")?;
        if !status.is_success() {
            let message = preview_failure_message(status.as_u16(), &status_text(status), &response_txt);
            tracing::warn!("{}", message);
            anyhow::bail!(message);
        }
        Ok(preview_body_or_placeholder(response_txt))
    }

    /// Starts a GET for the raw file. The response is returned whatever its
    /// status so the caller can forward it.
    pub async fn open_document(&self, file_path: &str, action: DocumentAction) -> anyhow::Result<reqwest::Response> {
        let url = self.url_for(file_path, action);
        tracing::info!("opening document: {}", url);
        self.client.get(&url).send().await.context("Failed to reach file server")
    }
}
