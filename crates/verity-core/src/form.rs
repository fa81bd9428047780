use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::keys::CriterionKey;
use crate::numeric::NumericInput;

/// Qualitative consistency rating from the narrative-observation instrument
/// (MIGDAS-2).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Consistency {
    #[default]
    Unclear,
    Consistent,
    Inconsistent,
}

/// How eagerly the decision threshold flags a positive result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RiskTolerance {
    Sensitive,
    #[default]
    Balanced,
    Specific,
}

/// A free-form instrument row: the instrument's display name and whatever
/// headline score was typed for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct InstrumentEntry {
    pub name: String,
    pub value: Option<NumericInput>,
    pub notes: Option<String>,
}

impl InstrumentEntry {
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.as_ref().and_then(NumericInput::value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct DevelopmentalHistory {
    pub early_onset: bool,
    pub cross_context_impairment: bool,
    pub masking: bool,
    /// Free-text developmental concerns.
    pub concerns: String,
}

/// Comorbidity and differential-diagnosis flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct Differentials {
    pub language_disorder: bool,
    pub intellectual_disability: bool,
    pub trauma: bool,
    pub adhd: bool,
    pub anxiety: bool,
    pub depression: bool,
    pub fasd: bool,
    pub tics: bool,
    /// Free-text "other" differential.
    pub other: String,
}

/// Snapshot of everything the clinician has entered so far.
///
/// Every field is optional on the wire; a partially filled form deserializes
/// to defaults rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct FormState {
    /// Severity selections: instrument id -> domain key -> severity label.
    /// A `null` label is an unselected domain.
    pub panels: BTreeMap<String, BTreeMap<String, Option<String>>>,
    pub instruments: Vec<InstrumentEntry>,
    pub consistency: Consistency,
    /// Clinician observation scores, 0..=3 per criterion. A present key is
    /// a defined score even when its value does not read as a number.
    pub observation: BTreeMap<CriterionKey, NumericInput>,
    pub history: DevelopmentalHistory,
    pub differentials: Differentials,
    pub risk_tolerance: RiskTolerance,
    pub date_of_birth: Option<jiff::civil::Date>,
    pub assessment_date: Option<jiff::civil::Date>,
}

impl FormState {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The selected severity for a domain. Blank selections count as unselected.
    pub fn severity(&self, instrument_id: &str, domain_key: &str) -> Option<&str> {
        self.panels
            .get(instrument_id)?
            .get(domain_key)?
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// All non-blank `(domain_key, severity)` selections for an instrument.
    pub fn selections<'a>(
        &'a self,
        instrument_id: &str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + use<'a> {
        self.panels
            .get(instrument_id)
            .into_iter()
            .flat_map(|panel| panel.iter())
            .filter_map(|(domain, severity)| Some((domain.as_str(), severity.as_deref()?.trim())))
            .filter(|(_, severity)| !severity.is_empty())
    }

    pub fn any_severity(&self, instrument_id: &str) -> bool {
        self.selections(instrument_id).next().is_some()
    }

    /// Set a severity selection, mostly useful for building fixtures.
    pub fn select(&mut self, instrument_id: &str, domain_key: &str, severity: &str) {
        self.panels
            .entry(instrument_id.to_string())
            .or_default()
            .insert(domain_key.to_string(), Some(severity.to_string()));
    }

    /// Numeric value of the named free-form instrument, if one was entered.
    pub fn instrument_value(&self, name: &str) -> Option<f64> {
        self.instruments
            .iter()
            .filter(|e| e.name == name)
            .find_map(InstrumentEntry::numeric_value)
    }

    /// Whole months between date of birth and assessment date, when both are known.
    pub fn age_months(&self) -> Result<Option<i32>, CoreError> {
        let (Some(dob), Some(assessed)) = (self.date_of_birth, self.assessment_date) else {
            return Ok(None);
        };
        if dob > assessed {
            return Err(CoreError::NegativeAge {
                date_of_birth: dob,
                assessment_date: assessed,
            });
        }
        let span = dob.until((jiff::Unit::Month, assessed))?;
        Ok(Some(span.get_months()))
    }
}
