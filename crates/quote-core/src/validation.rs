//! # Payload Validation
//!
//! Shape checks for incoming JSON bodies, run before anything touches the
//! store. Two modes:
//!
//! - [`validate_full`] for create: all six input fields required, each a
//!   string. `id` may be present (as a string) but is never used.
//! - [`validate_partial`] for update: every field optional, present fields
//!   must be strings. `{}` is a valid no-op patch.
//!
//! Only JSON types are checked. Tier codes and numeric age text are not
//! enforced here; see [`crate::pricing`] for how out-of-domain values price.
//! Unknown keys are ignored in both modes.

use serde_json::{Map, Value};

use crate::error::{FieldIssue, ValidationError};
use crate::record::{NewQuote, QuotePatch};

const NAME: &str = "name";
const AGE: &str = "age";
const INSURANCE_TIER: &str = "insuranceTier";
const DRINKS_ALCOHOL: &str = "drinksAlcohol";
const WEARS_GLASSES: &str = "wearsGlasses";
const HAS_ILLNESS: &str = "hasIllness";
const ID: &str = "id";

/// Validate a create payload.
pub fn validate_full(payload: &Value) -> Result<NewQuote, ValidationError> {
    let object = as_object(payload)?;
    let mut issues = Vec::new();

    let id = optional_string(object, ID, &mut issues);
    let name = required_string(object, NAME, &mut issues);
    let age = required_string(object, AGE, &mut issues);
    let insurance_tier = required_string(object, INSURANCE_TIER, &mut issues);
    let drinks_alcohol = required_string(object, DRINKS_ALCOHOL, &mut issues);
    let wears_glasses = required_string(object, WEARS_GLASSES, &mut issues);
    let has_illness = required_string(object, HAS_ILLNESS, &mut issues);

    match (
        name,
        age,
        insurance_tier,
        drinks_alcohol,
        wears_glasses,
        has_illness,
    ) {
        (
            Some(name),
            Some(age),
            Some(insurance_tier),
            Some(drinks_alcohol),
            Some(wears_glasses),
            Some(has_illness),
        ) if issues.is_empty() => Ok(NewQuote {
            id,
            name,
            age,
            insurance_tier,
            drinks_alcohol,
            wears_glasses,
            has_illness,
        }),
        _ => Err(ValidationError { issues }),
    }
}

/// Validate an update payload.
pub fn validate_partial(payload: &Value) -> Result<QuotePatch, ValidationError> {
    let object = as_object(payload)?;
    let mut issues = Vec::new();

    let patch = QuotePatch {
        name: optional_string(object, NAME, &mut issues),
        age: optional_string(object, AGE, &mut issues),
        insurance_tier: optional_string(object, INSURANCE_TIER, &mut issues),
        drinks_alcohol: optional_string(object, DRINKS_ALCOHOL, &mut issues),
        wears_glasses: optional_string(object, WEARS_GLASSES, &mut issues),
        has_illness: optional_string(object, HAS_ILLNESS, &mut issues),
    };

    if issues.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationError { issues })
    }
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, ValidationError> {
    payload.as_object().ok_or_else(|| ValidationError {
        issues: vec![FieldIssue::invalid_type("", "object", json_type(payload))],
    })
}

fn required_string(
    object: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match object.get(field) {
        None => {
            issues.push(FieldIssue::missing(field));
            None
        }
        Some(value) => string_value(field, value, issues),
    }
}

fn optional_string(
    object: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    object
        .get(field)
        .and_then(|value| string_value(field, value, issues))
}

fn string_value(field: &str, value: &Value, issues: &mut Vec<FieldIssue>) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        other => {
            issues.push(FieldIssue::invalid_type(field, "string", json_type(other)));
            None
        }
    }
}

/// JSON type name of a value, as reported in issues.
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
