//! Typed error handling for the grubdash API
//!
//! Every check in a request pipeline returns [`ApiError`] when it halts the
//! request. The variant decides the HTTP status; the message is the one shown
//! to the client.
//!
//! # Error Categories
//!
//! - [`ApiError::Validation`]: missing, malformed or out-of-range payload field
//! - [`ApiError::NotFound`]: route identifier does not resolve to a record
//! - [`ApiError::Conflict`]: body identifier disagrees with the route identifier
//! - [`ApiError::State`]: illegal order status transition or deletion
//! - [`ApiError::RouteNotFound`] / [`ApiError::MethodNotAllowed`]: routing fallbacks
//! - [`ApiError::Internal`]: store or runtime failure
//!
//! # Example
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! async fn find(service: &dyn DataService<Dish>, id: &str) -> ApiResult<Dish> {
//!     service.get(id).await?.ok_or_else(|| ApiError::not_found("Dish", id))
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The error type returned by every pipeline step
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload field missing, of the wrong type, or out of range
    #[error("{message}")]
    Validation { message: String },

    /// No record with the route identifier
    #[error("{resource} does not exist: {id}.")]
    NotFound { resource: &'static str, id: String },

    /// Body identifier does not match the route identifier
    #[error("{message}")]
    Conflict { message: String },

    /// Illegal state transition (e.g. changing a delivered order)
    #[error("{message}")]
    State { message: String },

    /// No route registered for the path
    #[error("Path not found: {path}")]
    RouteNotFound { path: String },

    /// Route exists but does not accept the method
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Store or runtime failure. The detail is logged, never returned.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict {
            message: message.into(),
        }
    }

    pub fn state(message: impl Into<String>) -> Self {
        ApiError::State {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::BAD_REQUEST,
            ApiError::State { .. } => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Conflict { .. } => "ID_CONFLICT",
            ApiError::State { .. } => "ILLEGAL_STATE",
            ApiError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            ApiError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    ///
    /// Internal failures are masked so no store detail leaks to clients.
    pub fn to_response(&self) -> ErrorResponse {
        let error = match self {
            ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        ErrorResponse { error }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.error_code(), error = %self, "request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::validation(format!("Invalid JSON: {}", err))
    }
}

/// Convert from anyhow::Error raised by store implementations
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(format!("{:#}", err))
    }
}

/// A specialized Result type for pipeline steps
pub type ApiResult<T> = Result<T, ApiError>;
