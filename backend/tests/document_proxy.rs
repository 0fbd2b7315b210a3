mod stub_server;

use std::collections::HashMap;

use axum::{
    Router,
    body::Body,
    extract::{Path, Query},
    http::{Request, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use backend::{api::documents::FileServerClient, server_extra::document_proxy::document_proxy_router};
use common::{
    document_preview::{DocumentAction, proxy_url},
    search_const::EMPTY_PREVIEW_HTML,
};
use tower::ServiceExt;

async fn stub_document(Path(file_path): Path<String>, Query(params): Query<HashMap<String, String>>) -> axum::response::Response {
    let action = params.get("action").cloned().unwrap_or_default();
    match (file_path.as_str(), action.as_str()) {
        ("/srv/docs/memo.docx", "view") => ([(header::CONTENT_TYPE, "text/html")], "<h1>Memo</h1>").into_response(),
        ("/srv/docs/blank.doc", "view") => ([(header::CONTENT_TYPE, "text/html")], "   ").into_response(),
        ("/srv/docs/report.pdf", "download") => (
            [
                (header::CONTENT_TYPE, "application/pdf"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"report.pdf\""),
            ],
            "%PDF-1.4",
        )
            .into_response(),
        _ => (StatusCode::NOT_FOUND, r#"{"detail": "File not found"}"#).into_response(),
    }
}

async fn stub_file_server() -> FileServerClient {
    let router = Router::new().route("/api/documents/{file_path}", get(stub_document));
    FileServerClient::new(&stub_server::spawn(router).await)
}

#[tokio::test]
async fn preview_returns_converted_html() {
    let client = stub_file_server().await;
    let html = client.fetch_preview_html("/srv/docs/memo.docx").await.unwrap();
    assert_eq!(html, "<h1>Memo</h1>");
}

#[tokio::test]
async fn blank_preview_gets_placeholder() {
    let client = stub_file_server().await;
    let html = client.fetch_preview_html("/srv/docs/blank.doc").await.unwrap();
    assert_eq!(html, EMPTY_PREVIEW_HTML);
}

#[tokio::test]
async fn preview_failure_carries_status_and_detail() {
    let client = stub_file_server().await;
    let err = client.fetch_preview_html("/srv/docs/missing.docx").await.unwrap_err();
    assert_eq!(err.to_string(), "Preview generation failed: 404 Not Found. File not found");
}

#[tokio::test]
async fn empty_path_is_rejected_without_request() {
    let client = FileServerClient::new(&stub_server::closed_port().await);
    assert!(client.fetch_preview_html("").await.is_err());
}

#[tokio::test]
async fn proxy_streams_download_with_headers() {
    let app = document_proxy_router(stub_file_server().await);
    let req = Request::builder()
        .uri(proxy_url("/srv/docs/report.pdf", DocumentAction::Download))
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(resp.headers()[header::CONTENT_DISPOSITION], "attachment; filename=\"report.pdf\"");
    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024).await.unwrap();
    assert_eq!(&bytes[..], b"%PDF-1.4");
}

#[tokio::test]
async fn proxy_forwards_upstream_errors() {
    let app = document_proxy_router(stub_file_server().await);
    let req = Request::builder()
        .uri(proxy_url("/srv/docs/missing.pdf", DocumentAction::View))
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn proxy_rejects_unknown_action() {
    let app = document_proxy_router(stub_file_server().await);
    let req = Request::builder()
        .uri("/_documents/%2Fsrv%2Fdocs%2Freport.pdf?action=delete")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn proxy_reports_unreachable_file_server() {
    let app = document_proxy_router(FileServerClient::new(&stub_server::closed_port().await));
    let req = Request::builder()
        .uri(proxy_url("/srv/docs/report.pdf", DocumentAction::View))
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
