//! HTTP error types

/// Error type for HTTP operations
///
/// These never escape the executor's public entry point: `execute` folds
/// every variant into a failure outcome. They exist so the internal request
/// path can use `?` and so failures can be logged with their cause.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(String),

    #[error("Invalid header value for {0}")]
    InvalidHeaderValue(String),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),
}
