//! Same-origin route that streams documents from the file server.

use axum::{
    Router,
    body::Body,
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use common::document_preview::{DOCUMENT_PROXY_PREFIX, DocumentAction};
use serde::Deserialize;

use crate::{api::documents::FileServerClient, config::get_config};

#[derive(Debug, Deserialize)]
pub struct DocumentProxyParams {
    action: Option<String>,
}

const FORWARDED_HEADERS: [header::HeaderName; 3] =
    [header::CONTENT_TYPE, header::CONTENT_DISPOSITION, header::CONTENT_LENGTH];

async fn _document_proxy(client: &FileServerClient, file_path: String, action: DocumentAction) -> anyhow::Result<Response> {
    tracing::info!("proxying document: {} ({})", file_path, action.as_str());
    let upstream = client.open_document(&file_path, action).await?;

    let status = StatusCode::from_u16(upstream.status().as_u16())?;
    let mut response = Response::builder().status(status);
    for name in FORWARDED_HEADERS {
        if let Some(value) = upstream.headers().get(name.as_str()) {
            response = response.header(name, HeaderValue::from_bytes(value.as_bytes())?);
        }
    }
    let body = Body::from_stream(upstream.bytes_stream());
    Ok(response.body(body)?)
}

pub async fn document_proxy(
    State(client): State<FileServerClient>,
    Path(file_path): Path<String>,
    Query(params): Query<DocumentProxyParams>,
) -> Response {
    let action = match params.action.as_deref().unwrap_or("view").parse::<DocumentAction>() {
        Ok(action) => action,
        Err(e) => return (StatusCode::BAD_REQUEST, Body::from(e)).into_response(),
    };
    match _document_proxy(&client, file_path, action).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("document_proxy: request failed: {:#?}", e);
            (StatusCode::BAD_GATEWAY, Body::from(e.to_string())).into_response()
        }
    }
}

/// Router serving `/_documents/{file_path}?action=view|download`.
pub fn document_proxy_router(client: FileServerClient) -> Router {
    Router::new()
        .route(&format!("{DOCUMENT_PROXY_PREFIX}/{{file_path}}"), get(document_proxy))
        .with_state(client)
}

/// Proxy router pointed at the configured file server.
pub fn default_document_proxy_router() -> Router {
    document_proxy_router(FileServerClient::new(&get_config().file_server_url))
}
