use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use verity_core::form::FormState;
use verity_instruments::ids;
use verity_instruments::scoring::CLASSIFICATION_BANDS;

/// Categorical estimate of support needs from adaptive functioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SupportEstimate {
    #[serde(rename = "High support likely")]
    High,
    #[serde(rename = "Moderate support possible")]
    Moderate,
    #[serde(rename = "Lower support likely")]
    Lower,
    #[serde(rename = "Insufficient data")]
    InsufficientData,
}

impl SupportEstimate {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportEstimate::High => "High support likely",
            SupportEstimate::Moderate => "Moderate support possible",
            SupportEstimate::Lower => "Lower support likely",
            SupportEstimate::InsufficientData => "Insufficient data",
        }
    }
}

impl fmt::Display for SupportEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scan the ABAS-3 severities. The lowest-band check runs first and the
/// first matching rule wins.
pub fn support_estimate(form: &FormState) -> SupportEstimate {
    let selected: Vec<&str> = form.selections(ids::ABAS3).map(|(_, s)| s).collect();
    let high = &CLASSIFICATION_BANDS[..2];
    let moderate = CLASSIFICATION_BANDS[2];

    if selected.iter().any(|s| high.contains(s)) {
        SupportEstimate::High
    } else if selected.contains(&moderate) {
        SupportEstimate::Moderate
    } else if !selected.is_empty() {
        SupportEstimate::Lower
    } else {
        SupportEstimate::InsufficientData
    }
}
