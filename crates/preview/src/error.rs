//! Typed error types for the preview client.

/// Preview failures, split by where they happened.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The request was rejected before any network I/O.
    #[error("invalid preview request: {0}")]
    InvalidRequest(String),

    /// The HTTP client could not be built or the response body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The service answered with something other than 200 OK.
    #[error(
        "expected status 200, received {status}: {}",
        String::from_utf8_lossy(.body)
    )]
    Status {
        /// The HTTP status code returned.
        status: u16,
        /// The raw response body.
        body: Vec<u8>,
    },

    /// The request never produced a response (connection refused, timeout, DNS).
    #[error("request to {url} failed")]
    Transport {
        /// The URL that was requested.
        url: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },
}
