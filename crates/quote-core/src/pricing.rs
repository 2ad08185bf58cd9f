//! # Premium Pricing
//!
//! Typed risk profile and the premium formula.
//!
//! ## Formula
//!
//! ```text
//! base  = 1200 if tier == "A" else 950
//! total = base
//!       + base * 0.10   if drinks alcohol
//!       + base * 0.05   if wears glasses
//!       + base * 0.05   if has an illness
//!       + base * 0.20   if age > 40, else base * 0.10
//! ```
//!
//! The additions are applied one at a time, in the order above, onto a
//! running `f64` total. Reassociating them changes the last bits of some
//! results, so [`premium`] must not be "simplified" into a single multiply.

use serde::{Deserialize, Serialize};

/// Base premium for tier "A".
pub const TIER_A_BASE: f64 = 1200.0;
/// Base premium for every other tier code.
pub const STANDARD_BASE: f64 = 950.0;

/// Surcharge rate when the client drinks alcohol.
pub const ALCOHOL_RATE: f64 = 0.10;
/// Surcharge rate when the client wears glasses.
pub const GLASSES_RATE: f64 = 0.05;
/// Surcharge rate when the client has an illness.
pub const ILLNESS_RATE: f64 = 0.05;
/// Age surcharge above [`AGE_THRESHOLD`].
pub const SENIOR_AGE_RATE: f64 = 0.20;
/// Age surcharge at or below [`AGE_THRESHOLD`].
pub const JUNIOR_AGE_RATE: f64 = 0.10;
/// Ages strictly above this take the senior surcharge.
pub const AGE_THRESHOLD: i64 = 40;

/// The literal a flag field must equal to count as set.
pub const FLAG_YES: &str = "yes";

/// Insurance tier, reduced to what pricing distinguishes.
///
/// Only the exact code `"A"` selects the higher base rate. Any other code,
/// including lowercase `"a"` and unknown codes like `"C"`, is [`Standard`].
///
/// [`Standard`]: InsuranceTier::Standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsuranceTier {
    /// Tier "A".
    A,
    /// Every other tier code.
    Standard,
}

impl InsuranceTier {
    /// Classify a wire tier code.
    pub fn from_code(code: &str) -> Self {
        if code == "A" {
            Self::A
        } else {
            Self::Standard
        }
    }

    /// The base premium for this tier.
    pub fn base_rate(self) -> f64 {
        match self {
            Self::A => TIER_A_BASE,
            Self::Standard => STANDARD_BASE,
        }
    }
}

/// Client age as read from free-form text.
///
/// Parsing is lenient: leading whitespace is skipped, an optional sign is
/// accepted, and the leading run of decimal digits is taken. `"45"`,
/// `" 45"` and `"45 years"` all read as 45. Text with no leading digits is
/// [`Age::Unparsed`], which never counts as over the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Age {
    /// A parsed integer age. Out-of-range digit runs saturate.
    Years(i64),
    /// No integer could be read.
    Unparsed,
}

impl Age {
    /// Read an age from wire text.
    ///
    /// Leading whitespace and an optional sign are skipped, then the longest
    /// run of decimal digits is read. A `0x`/`0X` prefix switches to hex
    /// digits, and a prefix with no hex digit after it is unparsed.
    pub fn parse(text: &str) -> Self {
        let rest = text.trim_start();
        let (negative, unsigned) = match rest.as_bytes().first() {
            Some(b'-') => (true, &rest[1..]),
            Some(b'+') => (false, &rest[1..]),
            _ => (false, rest),
        };
        let (radix, digits) = match unsigned.get(..2) {
            Some("0x" | "0X") => (16, &unsigned[2..]),
            _ => (10, unsigned),
        };

        let mut value: i64 = 0;
        let mut seen = false;
        for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
            seen = true;
            value = value
                .saturating_mul(i64::from(radix))
                .saturating_add(i64::from(digit));
        }

        match (seen, negative) {
            (false, _) => Self::Unparsed,
            (true, true) => Self::Years(-value),
            (true, false) => Self::Years(value),
        }
    }

    /// Whether this age takes the senior surcharge.
    pub fn is_over_threshold(self) -> bool {
        matches!(self, Self::Years(years) if years > AGE_THRESHOLD)
    }
}

/// Everything the premium formula depends on, parsed from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Tier classification.
    pub tier: InsuranceTier,
    /// Whether the client drinks alcohol.
    pub drinks_alcohol: bool,
    /// Whether the client wears glasses.
    pub wears_glasses: bool,
    /// Whether the client has an illness.
    pub has_illness: bool,
    /// Client age.
    pub age: Age,
}

impl RiskProfile {
    /// Parse the six pricing inputs from their wire strings.
    pub fn from_wire(
        insurance_tier: &str,
        drinks_alcohol: &str,
        wears_glasses: &str,
        has_illness: &str,
        age: &str,
    ) -> Self {
        Self {
            tier: InsuranceTier::from_code(insurance_tier),
            drinks_alcohol: is_yes(drinks_alcohol),
            wears_glasses: is_yes(wears_glasses),
            has_illness: is_yes(has_illness),
            age: Age::parse(age),
        }
    }
}

/// Whether a flag field is set. Exact, case-sensitive match on `"yes"`.
pub fn is_yes(flag: &str) -> bool {
    flag == FLAG_YES
}

/// Compute the premium for a risk profile.
pub fn premium(profile: &RiskProfile) -> f64 {
    let base = profile.tier.base_rate();
    let mut total = base;

    if profile.drinks_alcohol {
        total += base * ALCOHOL_RATE;
    }
    if profile.wears_glasses {
        total += base * GLASSES_RATE;
    }
    if profile.has_illness {
        total += base * ILLNESS_RATE;
    }

    if profile.age.is_over_threshold() {
        total += base * SENIOR_AGE_RATE;
    } else {
        total += base * JUNIOR_AGE_RATE;
    }

    total
}
