//! Error types for the proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the proxy's HTTP surface.
///
/// Every upstream failure mode (network error, timeout, non-200, upstream
/// "not found") collapses into `ProductNotFound`; the client never sees a 5xx
/// from the lookup path.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Barcode unknown upstream, or upstream unreachable
    #[error("Product not found")]
    ProductNotFound,

    /// Barcode empty after trimming whitespace
    #[error("Barcode cannot be empty")]
    InvalidBarcode,
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::ProductNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidBarcode => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "detail": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy.
pub type Result<T> = std::result::Result<T, ApiError>;
