//! Upstream HTTP Client
//!
//! Issues `GET {base}{id}` against the fixed upstream endpoint.

use axum::http::StatusCode;
use tracing::{debug, instrument};

/// Raw upstream reply: status code plus the undecoded body.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Thin wrapper around a shared `reqwest::Client`.
///
/// No request timeout is configured: a slow upstream holds the caller until
/// it answers or the connection fails.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Builds the upstream URL by appending `id` verbatim to the base.
    pub fn url_for(&self, id: &str) -> String {
        format!("{}{}", self.base_url, id)
    }

    /// Fetches `id` from upstream.
    ///
    /// Any status code is a successful fetch; only connection, protocol and
    /// body read failures are errors.
    #[instrument(skip(self))]
    pub async fn fetch(&self, id: &str) -> Result<UpstreamResponse, reqwest::Error> {
        let url = self.url_for(id);
        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        debug!(%url, %status, bytes = body.len(), "upstream responded");
        Ok(UpstreamResponse { status, body })
    }
}
