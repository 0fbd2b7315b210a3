//! View and download helpers for documents served by the file server.

use serde::{Deserialize, Serialize};

use crate::search_const::{EMPTY_PREVIEW_HTML, MODAL_VIEW_EXTENSIONS};

/// Route on this app's own server that forwards to the file server.
pub const DOCUMENT_PROXY_PREFIX: &str = "/_documents";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentAction {
    View,
    Download,
}

impl DocumentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentAction::View => "view",
            DocumentAction::Download => "download",
        }
    }
}

impl std::str::FromStr for DocumentAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(DocumentAction::View),
            "download" => Ok(DocumentAction::Download),
            other => Err(format!("unknown document action: {other}")),
        }
    }
}

/// Lower-cased extension after the last dot. `None` for names without a dot,
/// or whose only dot is the first or last character.
pub fn file_extension(name: &str) -> Option<String> {
    let dot = name.rfind('.')?;
    if dot == 0 || dot == name.len() - 1 {
        return None;
    }
    Some(name[dot + 1..].to_lowercase())
}

/// How the View action shows a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewStrategy {
    /// Fetch the converted HTML and show it in a modal.
    InlineHtml,
    /// Open the file URL in a new browser tab.
    NewTab,
}

impl PreviewStrategy {
    pub fn for_file_name(name: &str) -> Self {
        match file_extension(name) {
            Some(ext) if MODAL_VIEW_EXTENSIONS.contains(&ext.as_str()) => PreviewStrategy::InlineHtml,
            _ => PreviewStrategy::NewTab,
        }
    }
}

/// `{base}/api/documents/{path}?action=...` on the file server. The whole path,
/// slashes included, is one percent-encoded segment.
pub fn document_url(base: &str, path: &str, action: DocumentAction) -> String {
    format!(
        "{}/api/documents/{}?action={}",
        base.trim_end_matches('/'),
        urlencoding::encode(path),
        action.as_str()
    )
}

/// Same-origin URL the browser opens; the app server proxies it.
pub fn proxy_url(path: &str, action: DocumentAction) -> String {
    format!("{DOCUMENT_PROXY_PREFIX}/{}?action={}", urlencoding::encode(path), action.as_str())
}

/// Pulls `detail` or `message` out of a JSON error body, else returns the body.
pub fn extract_error_detail(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| {
            ["detail", "message"]
                .iter()
                .filter_map(|k| v.get(*k))
                .find(|d| !d.is_null() && d.as_str() != Some(""))
                .map(|d| match d {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
        })
        .unwrap_or_else(|| body.to_string())
}

/// Message for a preview request that came back with a non-success status.
pub fn preview_failure_message(status: u16, status_text: &str, body: &str) -> String {
    format!("Preview generation failed: {status} {status_text}. {}", extract_error_detail(body))
}

/// Replaces a blank preview with a placeholder paragraph.
pub fn preview_body_or_placeholder(body: String) -> String {
    if body.trim().is_empty() { EMPTY_PREVIEW_HTML.to_string() } else { body }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Error box rendered inside the preview modal.
pub fn preview_error_html(message: &str) -> String {
    format!(
        "<div class=\"preview-error\"><p><strong>Error Loading Preview:</strong></p><p>{}</p></div>",
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_rules() {
        assert_eq!(file_extension("report.DOCX").as_deref(), Some("docx"));
        assert_eq!(file_extension("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension(".hidden"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn strategy_by_extension() {
        assert_eq!(PreviewStrategy::for_file_name("a.doc"), PreviewStrategy::InlineHtml);
        assert_eq!(PreviewStrategy::for_file_name("a.Html"), PreviewStrategy::InlineHtml);
        assert_eq!(PreviewStrategy::for_file_name("a.pdf"), PreviewStrategy::NewTab);
        assert_eq!(PreviewStrategy::for_file_name("Document"), PreviewStrategy::NewTab);
    }

    #[test]
    fn urls_encode_the_whole_path() {
        assert_eq!(
            document_url("http://files:8000/", "/data/a b/c.pdf", DocumentAction::Download),
            "http://files:8000/api/documents/%2Fdata%2Fa%20b%2Fc.pdf?action=download"
        );
        assert_eq!(proxy_url("/x/y.doc", DocumentAction::View), "/_documents/%2Fx%2Fy.doc?action=view");
    }

    #[test]
    fn error_detail_from_json_or_text() {
        assert_eq!(extract_error_detail(r#"{"detail": "File not found"}"#), "File not found");
        assert_eq!(extract_error_detail(r#"{"message": "boom"}"#), "boom");
        assert_eq!(extract_error_detail("plain failure"), "plain failure");
        assert_eq!(
            preview_failure_message(404, "Not Found", r#"{"detail": "gone"}"#),
            "Preview generation failed: 404 Not Found. gone"
        );
    }

    #[test]
    fn blank_preview_gets_placeholder() {
        assert_eq!(preview_body_or_placeholder("  \n".into()), EMPTY_PREVIEW_HTML);
        assert_eq!(preview_body_or_placeholder("<p>x</p>".into()), "<p>x</p>");
    }

    #[test]
    fn error_html_is_escaped() {
        let html = preview_error_html("<script>");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
