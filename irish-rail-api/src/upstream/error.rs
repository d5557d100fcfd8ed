//! Upstream client error types.

/// Errors from decoding an upstream XML document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The document was empty or whitespace-only
    #[error("empty XML document")]
    Empty,

    /// The document was present but not well-formed, or the root shape
    /// did not match what the endpoint is documented to return
    #[error("XML parse error: {0}")]
    Xml(String),
}

/// Errors that can occur when talking to the realtime API.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a success status with no body
    #[error("no data received from upstream")]
    EmptyResponse,

    /// Upstream returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The XML body could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
