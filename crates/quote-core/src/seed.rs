//! # Seed Data
//!
//! The customer dataset the store is populated with at startup. A copy is
//! compiled into the crate ([`BUNDLED_SEED`]); deployments can point
//! [`load_seed`] at a different file.
//!
//! Seed documents are a JSON array of customer objects with the same
//! camelCase field names as the API. Any `totalCost` in the file is ignored
//! and recomputed.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::SeedError;
use crate::record::{QuoteId, QuoteRecord};
use crate::store::QuoteStore;

/// The dataset shipped with the service.
pub const BUNDLED_SEED: &str = include_str!("../data/customers.json");

/// One customer entry in a seed document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecord {
    /// Customer id. Accepted as a JSON string or non-negative integer.
    #[serde(deserialize_with = "id_text")]
    pub id: String,
    /// Client name.
    pub name: String,
    /// Age text.
    pub age: String,
    /// Tier code.
    pub insurance_tier: String,
    /// Alcohol flag.
    pub drinks_alcohol: String,
    /// Glasses flag.
    pub wears_glasses: String,
    /// Illness flag.
    pub has_illness: String,
}

impl From<SeedRecord> for QuoteRecord {
    fn from(seed: SeedRecord) -> Self {
        let mut record = QuoteRecord {
            id: QuoteId::new(seed.id),
            name: seed.name,
            age: seed.age,
            insurance_tier: seed.insurance_tier,
            drinks_alcohol: seed.drinks_alcohol,
            wears_glasses: seed.wears_glasses,
            has_illness: seed.has_illness,
            total_cost: 0.0,
        };
        record.reprice();
        record
    }
}

fn id_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Parse a seed document into priced records.
///
/// Rejects duplicate ids, and numeric ids at `u64::MAX` that would leave the
/// store no id to assign next.
pub fn parse_seed(json: &str) -> Result<Vec<QuoteRecord>, SeedError> {
    let entries: Vec<SeedRecord> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(entries.len());

    entries
        .into_iter()
        .map(|entry| {
            let record = QuoteRecord::from(entry);
            if record.id.as_counter() == Some(u64::MAX) {
                return Err(SeedError::IdOutOfRange(record.id.to_string()));
            }
            if !seen.insert(record.id.clone()) {
                return Err(SeedError::DuplicateId(record.id.to_string()));
            }
            Ok(record)
        })
        .collect()
}

/// Build the startup store from `path`, or from [`BUNDLED_SEED`] if `None`.
pub fn load_seed(path: Option<&Path>) -> Result<QuoteStore, SeedError> {
    let records = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
                path: path.display().to_string(),
                source,
            })?;
            parse_seed(&text)?
        }
        None => parse_seed(BUNDLED_SEED)?,
    };

    let store = QuoteStore::with_records(records);
    tracing::info!(
        records = store.len(),
        next_id = store.next_id(),
        "quote store seeded"
    );
    Ok(store)
}
