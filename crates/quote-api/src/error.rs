//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps quote-core errors to HTTP status codes. Every error body has the
//! shape `{"error": ...}`, where the value is a message string or, for
//! validation failures, the list of field issues. Internal details are
//! logged, never returned.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quote_core::{QuoteError, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Message returned for unknown item ids.
pub const NOT_FOUND_MESSAGE: &str = "item not found";

/// Message returned for any internal failure.
pub const INTERNAL_MESSAGE: &str = "internal error";

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Message text, or the validation report for 400 responses.
    pub error: ErrorPayload,
}

/// Contents of the `error` field.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorPayload {
    /// Field-level validation failures.
    Validation(ValidationError),
    /// Plain message.
    Message(String),
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Payload failed shape validation (400).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request body could not be decoded as JSON (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No item with the requested id (404).
    #[error("item {0} not found")]
    NotFound(String),

    /// Unexpected failure (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let payload = match self {
            Self::Validation(err) => ErrorPayload::Validation(err),
            Self::BadRequest(msg) => ErrorPayload::Message(msg),
            Self::NotFound(_) => ErrorPayload::Message(NOT_FOUND_MESSAGE.to_string()),
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "internal server error");
                ErrorPayload::Message(INTERNAL_MESSAGE.to_string())
            }
        };

        (status, Json(ErrorBody { error: payload })).into_response()
    }
}

impl From<QuoteError> for AppError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::NotFound { id } => Self::NotFound(id),
            err @ QuoteError::IdsExhausted => Self::Internal(err.to_string()),
        }
    }
}

/// Turn a handler panic into a 500 with the standard error body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(detail).into_response()
}
