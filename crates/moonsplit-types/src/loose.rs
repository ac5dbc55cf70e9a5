//! Lenient numeric deserialization for form-driven input.
//!
//! Form fields arrive as whatever the UI managed to parse: a number, a numeric
//! string (possibly with a decimal comma), an empty string or `null`. These
//! helpers never reject such input. Anything that is not a number becomes
//! `NaN` and is repaired later by the engine's sanitizer.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Number(f64),
    Text(String),
    Flag(bool),
}

/// Parses a numeric string the way a form field would be read.
///
/// Accepts surrounding whitespace and either decimal separator. When both `.`
/// and `,` appear, the last one is the decimal separator and the other is
/// dropped as digit grouping (`"1.800,50"` and `"1,800.50"` are both 1800.5).
/// A lone separator is always decimal, so `"1.800"` reads as 1.8.
/// Returns `NaN` for anything that does not parse.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    let normalized = match (trimmed.rfind('.'), trimmed.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => trimmed.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => trimmed.replace(',', ""),
        (None, Some(_)) => trimmed.replace(',', "."),
        _ => trimmed.to_string(),
    };
    normalized.parse::<f64>().unwrap_or(f64::NAN)
}

/// Default for a missing required numeric field.
pub fn missing_number() -> f64 {
    f64::NAN
}

/// Deserializes a required numeric field without ever failing on its value.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseValue::Number(n)) => n,
        Some(LooseValue::Text(s)) => parse_number(&s),
        Some(LooseValue::Flag(_)) | None => f64::NAN,
    })
}

/// Deserializes an optional numeric field.
///
/// `null` and blank strings mean "not supplied" and yield `None`; any other
/// value yields `Some`, even when it does not parse (the sanitizer drops it).
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(LooseValue::Number(n)) => Some(n),
        Some(LooseValue::Text(s)) if s.trim().is_empty() => None,
        Some(LooseValue::Text(s)) => Some(parse_number(&s)),
        Some(LooseValue::Flag(_)) => Some(f64::NAN),
    })
}
