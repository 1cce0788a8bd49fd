//! Error types and handling for the API server.
//!
//! This module defines a unified error type covering every way a request can
//! fail, and maps each variant onto an HTTP response so handlers can simply
//! return `Result<_, Error>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::domains::baz::formats::RenderError;
use crate::domains::validation::ValidationError;

/// A specialized Result type for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the API server.
#[derive(Debug, Error)]
pub enum Error {
    /// The request parameters or body failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The query string could not be decoded.
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    /// The request body could not be decoded.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// A validated record could not be rendered.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

impl Error {
    /// Create a new "invalid query" error.
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    /// Create a new "invalid body" error.
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(e) => e.status_code(),
            Self::InvalidQuery(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            Self::Validation(e) => {
                debug!(field = e.field_name(), "Validation failed: {}", e);
                e.to_body()
            }
            Self::InvalidQuery(_) | Self::InvalidBody(_) => {
                warn!("{}", self);
                json!({ "error": self.to_string() })
            }
            Self::Render(e) => {
                error!("Failed to render response: {}", e);
                json!({ "error": "Internal server error" })
            }
        };

        (status, Json(body)).into_response()
    }
}
