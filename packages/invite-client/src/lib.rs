//! Pure REST client for the meeting-invite API
//!
//! A minimal client with no form or UI logic: it serializes an
//! [`InviteRequest`] and POSTs it to `/api/invite` on the configured base
//! URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use invite_client::{InviteClient, InviteRequest};
//!
//! let client = InviteClient::from_env();
//! client.send(&InviteRequest {
//!     sender_email: "ada@example.org".into(),
//!     recipient_email: "grace@example.org".into(),
//!     datetime: "2026-09-01T10:00".into(),
//!     ..Default::default()
//! }).await?;
//! ```

pub mod error;
pub mod models;

pub use error::ClientError;
pub use models::InviteRequest;

use reqwest::Client;
use tracing::{debug, warn};

/// Base URL used when `INVITE_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Client for the invite API.
#[derive(Debug, Clone)]
pub struct InviteClient {
    http_client: Client,
    base_url: String,
}

impl InviteClient {
    /// Create a client against the given base URL (scheme + host + port,
    /// no path). A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the `INVITE_API_URL` environment variable,
    /// falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        let url = std::env::var("INVITE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(url)
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST an invite to `/api/invite` as JSON.
    ///
    /// Success is any 2xx status. For other statuses the response body is
    /// read as text and returned in [`ClientError::Rejected`].
    pub async fn send(&self, invite: &InviteRequest) -> Result<(), ClientError> {
        let url = format!("{}/api/invite", self.base_url);
        debug!(url = %url, recipient = %invite.recipient_email, "sending invite");

        let response = self.http_client.post(&url).json(invite).send().await?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "invite accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%status, body = %body, "invite rejected");
        Err(ClientError::Rejected { status, body })
    }
}
