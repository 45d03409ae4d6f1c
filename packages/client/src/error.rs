//! Error types for the pagination client.

use thiserror::Error;

/// Main error type for pagination fetches.
///
/// All variants are transport-class failures: the page either never reached
/// the service or came back unusable. Service-level "no more content"
/// responses are not errors — they arrive as `ok:false` envelopes.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure, timeout or invalid endpoint.
    #[error("page request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered outside the 2xx range.
    #[error("page service returned status {0}")]
    Status(u16),

    /// The response body was not a valid page envelope.
    #[error("failed to parse page response: {0}")]
    ResponseParse(String),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
