//! Error types for the navigation engine.
//!
//! None of these reach the user: the resolver turns every [`FetchError`]
//! into "try the next candidate", and a [`DecodeError`] on the forced-path
//! parameter falls back to the raw value.

use thiserror::Error;

/// Network/fetch-related errors for content requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Percent-decoding failures (`decodeURIComponent` semantics).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A `%` not followed by two hex digits.
    #[error("malformed escape at byte {0}")]
    MalformedEscape(usize),
    /// Decoded bytes are not valid UTF-8.
    #[error("decoded value is not valid UTF-8")]
    InvalidUtf8,
}
