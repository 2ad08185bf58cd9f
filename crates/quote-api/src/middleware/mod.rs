//! # Tower Middleware
//!
//! Layers wrapped around the whole router: request tracing and the CORS
//! origin allow-list.

pub mod cors;
pub mod tracing_layer;
