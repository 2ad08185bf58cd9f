//! # Quote Items API
//!
//! CRUD and search over the quote store. Every write prices the record
//! server-side; a client-supplied `totalCost` or `id` is never used.
//!
//! ## Endpoints
//!
//! - `GET /api/items` — list items
//! - `POST /api/items` — create item
//! - `GET /api/items/search?term=` — search items
//! - `GET /api/items/{id}` — get item
//! - `PUT /api/items/{id}` — partially update item
//! - `DELETE /api/items/{id}` — delete item

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use quote_core::{validate_full, validate_partial, QuoteRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;
use crate::extractors::{extract_query, extract_validated_json};
use crate::state::AppState;

/// Message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "item deleted";

// ── Request/Response DTOs ───────────────────────────────────────────

/// Query string for item search.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Numeric terms match an id exactly; anything else is a
    /// case-insensitive substring search. Missing means empty.
    #[serde(default)]
    pub term: String,
}

/// Acknowledgement for a delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    /// Always `"item deleted"`.
    pub message: String,
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the items router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/items/search", get(search_items))
        .route(
            "/api/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /api/items — List all items in insertion order.
#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "All items", body = Vec<QuoteRecord>),
    ),
    tag = "items"
)]
pub(crate) async fn list_items(State(state): State<AppState>) -> Json<Vec<QuoteRecord>> {
    Json(state.store.list())
}

/// POST /api/items — Create an item.
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = quote_core::NewQuote,
    responses(
        (status = 201, description = "Item created", body = QuoteRecord),
        (status = 400, description = "Validation error", body = crate::error::ErrorBody),
    ),
    tag = "items"
)]
pub(crate) async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<QuoteRecord>), AppError> {
    let new = extract_validated_json(body, validate_full)?;
    let record = state.store.create(new)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/items/search — Search items by id or text.
#[utoipa::path(
    get,
    path = "/api/items/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching items, possibly none", body = Vec<QuoteRecord>),
        (status = 400, description = "Malformed query string", body = crate::error::ErrorBody),
    ),
    tag = "items"
)]
pub(crate) async fn search_items(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<QuoteRecord>>, AppError> {
    let params = extract_query(query)?;
    Ok(Json(state.store.search(&params.term)))
}

/// GET /api/items/{id} — Get a single item.
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(("id" = String, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item found", body = QuoteRecord),
        (status = 404, description = "Item not found", body = crate::error::ErrorBody),
    ),
    tag = "items"
)]
pub(crate) async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuoteRecord>, AppError> {
    state
        .store
        .find_by_id(&id)
        .map(Json)
        .ok_or(AppError::NotFound(id))
}

/// PUT /api/items/{id} — Merge the provided fields into an item.
///
/// The body is validated before the id is looked up, so a bad body is a
/// 400 even when the id does not exist.
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(("id" = String, Path, description = "Item ID")),
    request_body = quote_core::QuotePatch,
    responses(
        (status = 200, description = "Item updated", body = QuoteRecord),
        (status = 400, description = "Validation error", body = crate::error::ErrorBody),
        (status = 404, description = "Item not found", body = crate::error::ErrorBody),
    ),
    tag = "items"
)]
pub(crate) async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<QuoteRecord>, AppError> {
    let patch = extract_validated_json(body, validate_partial)?;
    let record = state.store.update(&id, patch)?;
    Ok(Json(record))
}

/// DELETE /api/items/{id} — Delete an item.
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(("id" = String, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item deleted", body = DeleteResponse),
        (status = 404, description = "Item not found", body = crate::error::ErrorBody),
    ),
    tag = "items"
)]
pub(crate) async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.store.delete(&id)?;
    Ok(Json(DeleteResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}
