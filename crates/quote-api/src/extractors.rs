//! # Custom Extractors & Validation
//!
//! Helpers to pull a JSON body or query string out of a request and run it
//! through one of the quote-core validators.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;
use quote_core::ValidationError;
use serde_json::Value;

use crate::error::AppError;

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
///
/// Handlers take the body as `Result<Json<T>, JsonRejection>` so that
/// rejections go through [`AppError`] and keep the `{"error": ...}` shape.
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON body as a raw value and validate it into `T`.
pub fn extract_validated_json<T>(
    result: Result<Json<Value>, JsonRejection>,
    validate: impl FnOnce(&Value) -> Result<T, ValidationError>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    Ok(validate(&value)?)
}

/// Extract query parameters, mapping rejections to [`AppError::BadRequest`].
pub fn extract_query<T>(result: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    result
        .map(|Query(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
