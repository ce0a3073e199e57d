//! Lookup outcomes and their HTTP rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::error::internal_error_response;

/// Body substituted when an upstream error reply is not valid JSON
pub fn generic_upstream_error() -> Value {
    json!({ "message": "External API error" })
}

/// Outcome of a single lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    /// Served from cache; no upstream I/O happened
    Hit(Value),
    /// Fetched from upstream and now cached
    FetchedOk(Value),
    /// Upstream answered with a non-success status; never cached
    UpstreamError { status: StatusCode, body: Value },
    /// Upstream could not be reached; never cached
    TransportError(String),
}

impl LookupResult {
    #[cfg(test)]
    pub fn is_hit(&self) -> bool {
        matches!(self, LookupResult::Hit(_))
    }
}

impl IntoResponse for LookupResult {
    fn into_response(self) -> Response {
        match self {
            LookupResult::Hit(value) | LookupResult::FetchedOk(value) => {
                (StatusCode::OK, Json(value)).into_response()
            }
            LookupResult::UpstreamError { status, body } => (status, Json(body)).into_response(),
            // Already logged with its id by the lookup service
            LookupResult::TransportError(_) => internal_error_response(),
        }
    }
}
