//! Error types for the news module

use thiserror::Error;

/// Errors that can occur while searching a news feed
#[derive(Debug, Error)]
pub enum NewsError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Feed returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Failed to parse the feed document
    #[error("Parse error: {0}")]
    ParseError(String),
}
