use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A numeric field as typed into a form: either a number or raw text.
///
/// Form widgets hand over whatever the clinician typed, so a field may hold
/// `"2"`, `"n/a"`, or nothing at all. Use [`to_evidence_number`] to read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    /// `null`, booleans and anything else a widget may serialize. A `NaN`
    /// in the presentation layer arrives here as `null`.
    Other(serde_json::Value),
}

impl NumericInput {
    /// The finite value this input holds, if any.
    pub fn value(&self) -> Option<f64> {
        let v = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => s.trim().parse::<f64>().ok()?,
            NumericInput::Other(_) => return None,
        };
        v.is_finite().then_some(v)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

/// Total conversion used at every evidence accumulation site.
///
/// Absent, non-numeric, NaN and infinite inputs all map to `0.0`; finite
/// numbers pass through unchanged.
pub fn to_evidence_number(input: Option<&NumericInput>) -> f64 {
    input.and_then(NumericInput::value).unwrap_or(0.0)
}

/// Same rule applied to an already-numeric value.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
