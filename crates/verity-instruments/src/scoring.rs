use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// SRS-2 T-score interpretation bands.
pub const SRS2_BANDS: &[&str] = &["Average", "Mild", "Moderate", "Severe"];

/// Seven-point descriptive classification shared by WISC, ABAS and
/// Vineland style standard scores. Lowest functioning first.
pub const CLASSIFICATION_BANDS: &[&str] = &[
    "Extremely Low",
    "Very Low",
    "Low Average",
    "Average",
    "High Average",
    "Very High",
    "Extremely High",
];

/// ADOS-2 classification.
pub const ADOS_BANDS: &[&str] = &["Non-spectrum", "Autism Spectrum", "Autism"];

/// ADI-R algorithm cutoff result.
pub const ADI_BANDS: &[&str] = &["Below cutoff", "Meets cutoff"];

/// ASRS T-score interpretation.
pub const RATING_BANDS: &[&str] = &["Average", "Slightly Elevated", "Elevated", "Very Elevated"];

/// Sensory Profile 2 classification relative to same-age peers.
pub const SENSORY_BANDS: &[&str] = &[
    "Just Like the Majority",
    "More Than Others",
    "Much More Than Others",
    "Less Than Others",
    "Much Less Than Others",
];

/// The type of score a domain's headline value is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Unscaled count or sum.
    Raw,
    /// Normed score, typically mean=100, SD=15.
    Standard,
    /// Normed score, typically mean=10, SD=3.
    Scaled,
    /// T-score, mean=50, SD=10.
    TScore,
    /// Instrument-specific comparison or calibrated severity score.
    Comparison,
}

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub const T_SCORE: ScoreRange = ScoreRange {
        min: 20.0,
        max: 120.0,
        step: Some(1.0),
    };

    pub const STANDARD: ScoreRange = ScoreRange {
        min: 40.0,
        max: 160.0,
        step: Some(1.0),
    };

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// One scorable sub-scale of an instrument: the catalog row a severity
/// panel renders and the scoring engine keys its lookups by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub key: String,
    pub label: String,
    /// Selectable severity labels, in the instrument's own order.
    pub severities: Vec<String>,
    pub score_type: ScoreType,
    pub range: ScoreRange,
}

impl Domain {
    pub fn new(
        key: &str,
        label: &str,
        severities: &[&str],
        score_type: ScoreType,
        range: ScoreRange,
    ) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            severities: severities.iter().map(|s| s.to_string()).collect(),
            score_type,
            range,
        }
    }

    pub fn has_severity(&self, label: &str) -> bool {
        self.severities.iter().any(|s| s == label)
    }

    /// Zero-based position of `label` in this domain's scale.
    pub fn severity_rank(&self, label: &str) -> Option<usize> {
        self.severities.iter().position(|s| s == label)
    }
}

/// A numeric score entered against one domain.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub domain_key: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub domain_key: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub score_type: ScoreType,
    pub message: String,
}
