#![deny(missing_docs)]

//! # quote-core — Domain Types for the Insurance Quote Service
//!
//! This crate owns everything about a quote that is not HTTP: the record
//! shape, payload validation, the premium formula, and the in-memory store.
//! It depends only on `serde`, `serde_json`, `thiserror`, `parking_lot`,
//! `tracing` and `utoipa` (schema derives) from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Strings on the wire, types in the formula.** A [`QuoteRecord`] keeps
//!    the client's text verbatim so it can be echoed back and searched, but
//!    [`pricing::premium`] only ever sees a parsed [`RiskProfile`].
//!
//! 2. **`totalCost` is derived, never stored from input.** Every path that
//!    produces a record (create, update, seed load) goes through
//!    [`QuoteRecord::reprice`].
//!
//! 3. **One injectable [`QuoteStore`].** No global state. The API crate clones
//!    the handle into its application state.

pub mod error;
pub mod pricing;
pub mod record;
pub mod seed;
pub mod store;
pub mod validation;

pub use error::{FieldIssue, IssueCode, QuoteError, SeedError, ValidationError};
pub use pricing::{premium, Age, InsuranceTier, RiskProfile};
pub use record::{NewQuote, QuoteId, QuotePatch, QuoteRecord};
pub use seed::{load_seed, parse_seed, SeedRecord, BUNDLED_SEED};
pub use store::QuoteStore;
pub use validation::{validate_full, validate_partial};
