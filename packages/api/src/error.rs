//! Errors from the backend client.
//!
//! Screens treat every variant as the same generic failure. The variants exist
//! so the cause ends up in the logs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not load photo {reference}: {reason}")]
    Photo { reference: String, reason: String },

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}
