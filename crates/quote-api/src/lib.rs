//! # quote-api — Axum API Service for Insurance Quotes
//!
//! HTTP/JSON front end over [`quote_core::QuoteStore`]. Handlers validate
//! the body, hand it to the store (which prices it), and serialize the
//! result. No business logic lives in this crate.
//!
//! ## API Surface
//!
//! | Route                        | Module             |
//! |------------------------------|--------------------|
//! | `/api/items`, `/api/items/*` | [`routes::items`]  |
//! | `/openapi.json`              | [`openapi`]        |
//! | `/health/*`                  | this module        |
//!
//! ## Middleware Stack (outermost first)
//!
//! ```text
//! TraceLayer → CorsLayer → CatchPanicLayer → Handler
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

pub use config::AppConfig;
pub use error::AppError;
pub use state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let cors = middleware::cors::layer(state.config.cors_origin.clone());

    let api = Router::new()
        .merge(routes::items::router())
        .merge(openapi::router())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new()
        .merge(health)
        .merge(api)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(cors)
        .layer(middleware::tracing_layer::layer())
}

/// Liveness probe. Always 200 while the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. The store is built before the listener binds, so a
/// serving process is always ready.
async fn readiness() -> &'static str {
    "ready"
}
