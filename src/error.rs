//! Error types for the proxy server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Proxy Error Enum ==
/// Unified error type for the proxy server.
///
/// Upstream transport failures are deliberately distinct from confirmed
/// not-found results: only the latter may be cached as a negative entry.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Request is missing or has malformed input
    #[error("Invalid request: {0}")]
    InvalidArgument(String),

    /// Upstream confirmed the resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The HackerNews request itself failed (transport, timeout, status)
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Upstream answered but the payload was unusable
    #[error("Unexpected upstream data: {0}")]
    UpstreamData(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ProxyError::NotFound(_) => StatusCode::NOT_FOUND,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ProxyError::UpstreamData(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy server.
pub type Result<T> = std::result::Result<T, ProxyError>;
