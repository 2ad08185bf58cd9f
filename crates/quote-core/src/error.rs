//! # Error Hierarchy
//!
//! Structured error types for the quote domain, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Errors raised by [`crate::QuoteStore`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// No record with the given id exists in the store.
    #[error("quote {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Every `u64` id has been assigned; no new record can be created.
    #[error("quote id space exhausted")]
    IdsExhausted,
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// A required field was absent.
    Missing,
    /// The field was present but not of the expected JSON type.
    InvalidType,
}

/// One rejected field in a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldIssue {
    /// Wire name of the field. Empty when the payload itself is rejected.
    pub field: String,
    /// Kind of failure.
    pub code: IssueCode,
    /// Expected JSON type.
    pub expected: String,
    /// JSON type actually received (`"undefined"` when missing).
    pub received: String,
    /// Human-readable description.
    pub message: String,
}

impl FieldIssue {
    /// A required field that was not supplied.
    pub fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            code: IssueCode::Missing,
            expected: "string".to_string(),
            received: "undefined".to_string(),
            message: format!("{field} is required"),
        }
    }

    /// A field (or the payload, when `field` is empty) of the wrong type.
    pub fn invalid_type(field: &str, expected: &str, received: &str) -> Self {
        let subject = if field.is_empty() { "payload" } else { field };
        Self {
            field: field.to_string(),
            code: IssueCode::InvalidType,
            expected: expected.to_string(),
            received: received.to_string(),
            message: format!("{subject} must be of type {expected}, received {received}"),
        }
    }
}

/// A request payload failed shape validation.
///
/// Carries every offending field, not just the first, so clients can fix a
/// payload in one round trip.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[error("{} invalid field(s): {}", .issues.len(), field_list(.issues))]
pub struct ValidationError {
    /// The individual field failures, in field declaration order.
    pub issues: Vec<FieldIssue>,
}

fn field_list(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| if i.field.is_empty() { "<payload>" } else { i.field.as_str() })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors while loading the startup dataset.
#[derive(Error, Debug)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The seed document is not a JSON array of customer records.
    #[error("seed data is not valid: {0}")]
    Json(#[from] serde_json::Error),

    /// Two seed records share an id.
    #[error("duplicate seed id {0}")]
    DuplicateId(String),

    /// A numeric seed id is too large to leave room for the id counter.
    #[error("seed id {0} is out of range")]
    IdOutOfRange(String),
}
