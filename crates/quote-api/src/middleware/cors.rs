//! # CORS
//!
//! Browser access is restricted to one configured origin. Requests without
//! an `Origin` header (curl, server-to-server) are unaffected.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build a CORS layer that allows exactly `origin`.
pub fn layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
}
