//! # Quote Records
//!
//! The wire-level quote record plus the two validated payload types that
//! produce or modify it. All input fields stay as the client sent them;
//! [`QuoteRecord::profile`] is the single place they are interpreted.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::pricing::{premium, RiskProfile};

/// Server-assigned quote identifier.
///
/// Serialized as a plain JSON string. Ids minted by the store are decimal
/// counters; seed ids are taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "12")]
pub struct QuoteId(String);

impl QuoteId {
    /// Id for the given counter value.
    pub fn from_counter(n: u64) -> Self {
        Self(n.to_string())
    }

    /// Wrap an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as a counter value, if it is a plain decimal number.
    pub fn as_counter(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl std::fmt::Display for QuoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored insurance quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    /// Server-assigned id, immutable once assigned.
    pub id: QuoteId,
    /// Client name.
    #[schema(example = "Ana")]
    pub name: String,
    /// Client age as decimal text.
    #[schema(example = "45")]
    pub age: String,
    /// Tier code. `"A"` selects the higher base rate.
    #[schema(example = "A")]
    pub insurance_tier: String,
    /// `"yes"` when the client drinks alcohol.
    #[schema(example = "yes")]
    pub drinks_alcohol: String,
    /// `"yes"` when the client wears glasses.
    #[schema(example = "no")]
    pub wears_glasses: String,
    /// `"yes"` when the client has an illness.
    #[schema(example = "no")]
    pub has_illness: String,
    /// Derived premium. Always recomputed by the server.
    #[schema(example = 1560.0)]
    pub total_cost: f64,
}

impl QuoteRecord {
    /// Build a priced record from a validated create payload.
    pub fn from_new(id: QuoteId, new: NewQuote) -> Self {
        let mut record = Self {
            id,
            name: new.name,
            age: new.age,
            insurance_tier: new.insurance_tier,
            drinks_alcohol: new.drinks_alcohol,
            wears_glasses: new.wears_glasses,
            has_illness: new.has_illness,
            total_cost: 0.0,
        };
        record.reprice();
        record
    }

    /// Parse the pricing inputs out of the record's wire fields.
    pub fn profile(&self) -> RiskProfile {
        RiskProfile::from_wire(
            &self.insurance_tier,
            &self.drinks_alcohol,
            &self.wears_glasses,
            &self.has_illness,
            &self.age,
        )
    }

    /// Recompute `total_cost` from the current fields.
    pub fn reprice(&mut self) {
        self.total_cost = premium(&self.profile());
    }

    /// Merge the provided fields over this record and reprice.
    ///
    /// The id is never touched.
    pub fn apply(&mut self, patch: QuotePatch) {
        let QuotePatch {
            name,
            age,
            insurance_tier,
            drinks_alcohol,
            wears_glasses,
            has_illness,
        } = patch;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = age {
            self.age = v;
        }
        if let Some(v) = insurance_tier {
            self.insurance_tier = v;
        }
        if let Some(v) = drinks_alcohol {
            self.drinks_alcohol = v;
        }
        if let Some(v) = wears_glasses {
            self.wears_glasses = v;
        }
        if let Some(v) = has_illness {
            self.has_illness = v;
        }
        self.reprice();
    }
}

/// Validated payload for creating a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    /// Accepted for compatibility and ignored; the store assigns ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Client name.
    pub name: String,
    /// Client age as decimal text.
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

/// Validated payload for a partial update. Absent fields are left as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuotePatch {
    /// New client name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New age text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    /// New tier code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_tier: Option<String>,
    /// New alcohol flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drinks_alcohol: Option<String>,
    /// New glasses flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wears_glasses: Option<String>,
    /// New illness flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_illness: Option<String>,
}

impl QuotePatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
