//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the quote API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Insurance Quote API",
        version = "0.1.0",
        description = "CRUD and search over insurance quotes with server-side premium pricing.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::items::list_items,
        crate::routes::items::create_item,
        crate::routes::items::search_items,
        crate::routes::items::get_item,
        crate::routes::items::update_item,
        crate::routes::items::delete_item,
    ),
    components(schemas(
        quote_core::QuoteRecord,
        quote_core::QuoteId,
        quote_core::NewQuote,
        quote_core::QuotePatch,
        quote_core::ValidationError,
        quote_core::FieldIssue,
        quote_core::IssueCode,
        crate::routes::items::DeleteResponse,
        crate::error::ErrorBody,
        crate::error::ErrorPayload,
    )),
    tags(
        (name = "items", description = "Insurance quote records"),
    )
)]
pub struct ApiDoc;

/// Router serving the OpenAPI document.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
