//! Error type shared by the fetch, decode and sprite steps.

use thiserror::Error;

/// Failure of a single step (resource GET, decode, sprite download or save).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported a transport error (DNS, connect, timeout, TLS, ...).
    #[error("HTTP request error: {0}")]
    Request(#[from] curl::Error),

    /// Server answered with something other than 200 OK.
    #[error("unexpected status code: {0}")]
    Status(u32),

    /// Response body was not the expected JSON shape.
    #[error("error parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Sprite file create/write failed.
    #[error("error saving sprite: {0}")]
    Io(#[from] std::io::Error),

    /// Base URL or resource identifier could not form a valid URL.
    #[error("invalid resource URL: {0}")]
    InvalidUrl(String),

    /// Background worker panicked or was cancelled before reporting.
    #[error("fetch worker failed: {0}")]
    Worker(String),
}
