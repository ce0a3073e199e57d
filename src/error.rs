//! Error types for the proxy
//!
//! Provides unified error handling using thiserror. Upstream HTTP error
//! statuses are not errors here: they are forwarded to the caller as-is.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == Proxy Error Enum ==
/// Failures that surface to clients as a generic internal error.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Upstream could not be reached or its body could not be read
    #[error("Upstream transport error: {0}")]
    UpstreamTransport(String),

    /// Any other fault in the lookup path
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Body returned for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        // The variant is only visible in logs
        error!(error = %self, "request failed");
        internal_error_response()
    }
}

/// Generic 500 response, rendered without logging.
pub(crate) fn internal_error_response() -> Response {
    let body = Json(json!({
        "error": INTERNAL_ERROR_MESSAGE
    }));

    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

// == Result Type Alias ==
pub type Result<T> = std::result::Result<T, ProxyError>;
