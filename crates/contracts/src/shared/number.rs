//! Lenient numeric decoding.
//!
//! SQL `NUMERIC` and `BIGINT` columns frequently reach the client as JSON
//! strings ("12.50"), so numeric fields accept either representation.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f64),
}

fn parse(value: StringOrFloat) -> Result<f64, String> {
    match value {
        StringOrFloat::Float(f) => Ok(f),
        StringOrFloat::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid number {:?}: {}", s, e)),
    }
}

/// Required number, as JSON number or numeric string.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    parse(StringOrFloat::deserialize(deserializer)?).map_err(de::Error::custom)
}

/// Optional number where `null` means zero. Pair with `#[serde(default)]`
/// to cover a missing key as well.
pub fn lenient_f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(value) => parse(value).map_err(de::Error::custom),
        None => Ok(0.0),
    }
}

/// Optional number: `null`, a missing key (with `#[serde(default)]`) or a
/// blank string decode to `None`.
pub fn lenient_f64_option<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(StringOrFloat::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => parse(value).map(Some).map_err(de::Error::custom),
        None => Ok(None),
    }
}
