//! Error types for the invite API client.

use thiserror::Error;

/// Errors produced by [`crate::InviteClient::send`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (DNS, connection, protocol failure).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status. The body has already
    /// been read as text so callers can surface it directly.
    #[error("invite API returned {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}
