//! # API Route Modules
//!
//! - `items` — quote CRUD, search, and server-side pricing under `/api/items`.

pub mod items;
