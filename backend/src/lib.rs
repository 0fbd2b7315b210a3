//! Server-side clients for the search API and the document file server.

pub mod config;
pub mod http_utils;
pub mod api;
pub mod server_extra;
