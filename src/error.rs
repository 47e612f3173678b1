//! Error types for cache key construction
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Key Error Enum ==
/// Unified error type for key construction and the inspection service.
#[derive(Error, Debug)]
pub enum KeyError {
    /// Prefix and version leave no room for a physical key
    #[error("Invalid key configuration: {0}")]
    InvalidConfig(String),

    /// Raw key could not be turned into a safe physical key
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for KeyError {
    fn into_response(self) -> Response {
        let status = match &self {
            KeyError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
            KeyError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            KeyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            KeyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for key construction.
pub type Result<T> = std::result::Result<T, KeyError>;
