//! Common library exports shared between frontend and backend.

extern crate serde;

pub mod error;
pub mod search_const;
pub mod search_query;
pub mod filter_selection;
pub mod search_request;
pub mod search_result;
pub mod document;
pub mod document_preview;
pub mod grid;
pub mod search_state;
pub mod url_query;
