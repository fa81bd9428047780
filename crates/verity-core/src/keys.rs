use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the seven DSM-5-TR style sub-criteria. `A*` covers social
/// communication, `B*` restricted and repetitive behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CriterionKey {
    A1,
    A2,
    A3,
    B1,
    B2,
    B3,
    B4,
}

impl CriterionKey {
    pub const ALL: [CriterionKey; 7] = [
        CriterionKey::A1,
        CriterionKey::A2,
        CriterionKey::A3,
        CriterionKey::B1,
        CriterionKey::B2,
        CriterionKey::B3,
        CriterionKey::B4,
    ];

    pub const SOCIAL: [CriterionKey; 3] = [CriterionKey::A1, CriterionKey::A2, CriterionKey::A3];

    pub const RESTRICTED: [CriterionKey; 4] = [
        CriterionKey::B1,
        CriterionKey::B2,
        CriterionKey::B3,
        CriterionKey::B4,
    ];
}

/// Identifier of a single evidence accumulator.
///
/// The serialized names are load-bearing: configuration documents and weight
/// tables reference accumulators by exactly these strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EvidenceKey {
    A1,
    A2,
    A3,
    B1,
    B2,
    B3,
    B4,
    #[serde(rename = "onsetEarly")]
    OnsetEarly,
    #[serde(rename = "impairment")]
    Impairment,
    #[serde(rename = "masking")]
    Masking,
    #[serde(rename = "langDisorder")]
    LangDisorder,
    #[serde(rename = "intellectualDisability")]
    IntellectualDisability,
    #[serde(rename = "altTrauma")]
    AltTrauma,
    #[serde(rename = "altADHD")]
    AltAdhd,
    #[serde(rename = "altAnxiety")]
    AltAnxiety,
    #[serde(rename = "altOther")]
    AltOther,
}

impl EvidenceKey {
    pub const ALL: [EvidenceKey; 16] = [
        EvidenceKey::A1,
        EvidenceKey::A2,
        EvidenceKey::A3,
        EvidenceKey::B1,
        EvidenceKey::B2,
        EvidenceKey::B3,
        EvidenceKey::B4,
        EvidenceKey::OnsetEarly,
        EvidenceKey::Impairment,
        EvidenceKey::Masking,
        EvidenceKey::LangDisorder,
        EvidenceKey::IntellectualDisability,
        EvidenceKey::AltTrauma,
        EvidenceKey::AltAdhd,
        EvidenceKey::AltAnxiety,
        EvidenceKey::AltOther,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceKey::A1 => "A1",
            EvidenceKey::A2 => "A2",
            EvidenceKey::A3 => "A3",
            EvidenceKey::B1 => "B1",
            EvidenceKey::B2 => "B2",
            EvidenceKey::B3 => "B3",
            EvidenceKey::B4 => "B4",
            EvidenceKey::OnsetEarly => "onsetEarly",
            EvidenceKey::Impairment => "impairment",
            EvidenceKey::Masking => "masking",
            EvidenceKey::LangDisorder => "langDisorder",
            EvidenceKey::IntellectualDisability => "intellectualDisability",
            EvidenceKey::AltTrauma => "altTrauma",
            EvidenceKey::AltAdhd => "altADHD",
            EvidenceKey::AltAnxiety => "altAnxiety",
            EvidenceKey::AltOther => "altOther",
        }
    }
}

impl From<CriterionKey> for EvidenceKey {
    fn from(key: CriterionKey) -> Self {
        match key {
            CriterionKey::A1 => EvidenceKey::A1,
            CriterionKey::A2 => EvidenceKey::A2,
            CriterionKey::A3 => EvidenceKey::A3,
            CriterionKey::B1 => EvidenceKey::B1,
            CriterionKey::B2 => EvidenceKey::B2,
            CriterionKey::B3 => EvidenceKey::B3,
            CriterionKey::B4 => EvidenceKey::B4,
        }
    }
}

impl fmt::Display for EvidenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvidenceKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EvidenceKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::UnknownEvidenceKey(s.to_string()))
    }
}
