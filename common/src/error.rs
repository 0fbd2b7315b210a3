//! Error taxonomy of the search client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search_const::{FETCH_FAILED_MESSAGE, INCOMPLETE_DATE_RANGE_MESSAGE};

/// Everything that can go wrong between assembling a request and reconciling
/// its response. Serializable so it can travel through a server function.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SearchError {
    /// Only one bound of the from/to date pair is set.
    #[error("incomplete date range")]
    IncompleteDateRange,

    /// The search backend answered with a non-success status.
    #[error("API Error: {status} - {status_text}.")]
    Api { status: u16, status_text: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response structure: {0}")]
    MalformedResponse(String),

    /// The request never produced a response (network, server function).
    #[error("request failed: {0}")]
    Transport(String),
}

impl SearchError {
    /// Message shown to the user next to the (now empty) result list.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::IncompleteDateRange => INCOMPLETE_DATE_RANGE_MESSAGE.to_string(),
            _ => FETCH_FAILED_MESSAGE.to_string(),
        }
    }
}
