//! # Quote Store
//!
//! Ordered, in-memory collection of [`QuoteRecord`]s with sequential id
//! assignment.
//!
//! The handle is cheap to clone; clones share the same collection. Every
//! operation runs under a single `parking_lot` lock acquisition and never
//! holds it across an `.await`, so a request's validate → price → mutate
//! sequence is never interleaved with another writer.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::QuoteError;
use crate::record::{NewQuote, QuoteId, QuotePatch, QuoteRecord};

#[derive(Debug)]
struct Inner {
    records: Vec<QuoteRecord>,
    /// `None` once the `u64` id space is used up.
    next_id: Option<u64>,
}

/// Thread-safe, cloneable quote collection.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    inner: Arc<RwLock<Inner>>,
}

impl QuoteStore {
    /// Create an empty store. The first id assigned is `"1"`.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store pre-populated with `records`, in order.
    ///
    /// Records are taken as already priced ([`QuoteRecord::from_new`] and the
    /// seed loader both price on construction). The id counter starts one
    /// past the largest numeric id present, or at 1 if there is none. Callers
    /// are responsible for id uniqueness (see [`crate::seed::parse_seed`]).
    pub fn with_records(records: Vec<QuoteRecord>) -> Self {
        let next_id = match records.iter().filter_map(|r| r.id.as_counter()).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };

        Self {
            inner: Arc::new(RwLock::new(Inner { records, next_id })),
        }
    }

    /// All records, in insertion order.
    pub fn list(&self) -> Vec<QuoteRecord> {
        self.inner.read().records.clone()
    }

    /// Assign the next id, price the quote and append it.
    ///
    /// Fails with [`QuoteError::IdsExhausted`] once every `u64` id has been
    /// handed out; an assigned id is never reused.
    pub fn create(&self, new: NewQuote) -> Result<QuoteRecord, QuoteError> {
        let mut inner = self.inner.write();
        let counter = inner.next_id.ok_or(QuoteError::IdsExhausted)?;
        inner.next_id = counter.checked_add(1);

        let record = QuoteRecord::from_new(QuoteId::from_counter(counter), new);
        inner.records.push(record.clone());
        tracing::debug!(id = %record.id, total_cost = record.total_cost, "quote created");
        Ok(record)
    }

    /// Exact id lookup.
    pub fn find_by_id(&self, id: &str) -> Option<QuoteRecord> {
        self.inner
            .read()
            .records
            .iter()
            .find(|r| r.id.as_str() == id)
            .cloned()
    }

    /// Search by id or by text.
    ///
    /// The term is lowercased first. An empty term, or one that reads as a
    /// number, is matched exactly against ids, so it yields at most
    /// one record. Any other term matches records whose name, tier or flag
    /// fields contain it case-insensitively, or whose age text contains it.
    pub fn search(&self, term: &str) -> Vec<QuoteRecord> {
        let term = term.to_lowercase();
        let inner = self.inner.read();

        if is_numeric_term(&term) {
            return inner
                .records
                .iter()
                .filter(|r| r.id.as_str() == term)
                .cloned()
                .collect();
        }

        inner
            .records
            .iter()
            .filter(|r| matches_text(r, &term))
            .cloned()
            .collect()
    }

    /// Merge `patch` into the record with `id`, reprice, and return it.
    pub fn update(&self, id: &str, patch: QuotePatch) -> Result<QuoteRecord, QuoteError> {
        let mut inner = self.inner.write();
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id.as_str() == id)
            .ok_or_else(|| not_found(id))?;

        record.apply(patch);
        tracing::debug!(id = %record.id, total_cost = record.total_cost, "quote updated");
        Ok(record.clone())
    }

    /// Remove the record with `id`, returning it.
    pub fn delete(&self, id: &str) -> Result<QuoteRecord, QuoteError> {
        let mut inner = self.inner.write();
        let index = inner
            .records
            .iter()
            .position(|r| r.id.as_str() == id)
            .ok_or_else(|| not_found(id))?;

        let removed = inner.records.remove(index);
        tracing::debug!(id = %removed.id, "quote deleted");
        Ok(removed)
    }

    /// The id the next [`create`](Self::create) will assign, or `None` if
    /// the id space is exhausted.
    pub fn next_id(&self) -> Option<u64> {
        self.inner.read().next_id
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: &str) -> QuoteError {
    QuoteError::NotFound { id: id.to_string() }
}

/// Whether a (lowercased) search term should be treated as an id lookup.
///
/// Out-of-range literals such as `1e400` still count as numbers. The
/// spelled-out `inf`/`infinity`/`nan` words are text.
fn is_numeric_term(term: &str) -> bool {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return true;
    }
    let digits = trimmed.trim_start_matches(['+', '-']);
    if digits.starts_with("inf") || digits.starts_with("nan") {
        return false;
    }
    trimmed.parse::<f64>().is_ok()
}

fn matches_text(record: &QuoteRecord, term: &str) -> bool {
    [
        &record.name,
        &record.insurance_tier,
        &record.drinks_alcohol,
        &record.wears_glasses,
        &record.has_illness,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(term))
        || record.age.contains(term)
}
