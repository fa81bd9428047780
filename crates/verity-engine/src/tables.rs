//! Per-condition weight tables.
//!
//! Two kinds of table live here. [`domain_weights`] gives each condition's
//! prior and evidence-key weights for the likelihood model. [`severity_table`]
//! gives each condition's per-instrument, per-domain, per-severity weights,
//! used by [`condition_profile`] to rank the differential.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use verity_core::form::FormState;
use verity_core::keys::EvidenceKey;
use verity_instruments::ids;

use crate::config::AgeBandPrior;
use crate::error::ConfigError;
use crate::model::sigmoid;

/// Target condition a ruleset estimates the likelihood of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Condition {
    Asd,
    Adhd,
    Id,
    Fasd,
}

impl Condition {
    pub const ALL: [Condition; 4] = [Condition::Asd, Condition::Adhd, Condition::Id, Condition::Fasd];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Asd => "Autism Spectrum Disorder",
            Condition::Adhd => "ADHD",
            Condition::Id => "Intellectual Disability",
            Condition::Fasd => "FASD",
        }
    }

    /// Whether the clinician flagged this condition as a known differential.
    fn flagged(&self, form: &FormState) -> bool {
        let d = &form.differentials;
        match self {
            Condition::Asd => false,
            Condition::Adhd => d.adhd,
            Condition::Id => d.intellectual_disability,
            Condition::Fasd => d.fasd,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Condition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asd" => Ok(Condition::Asd),
            "adhd" => Ok(Condition::Adhd),
            "id" => Ok(Condition::Id),
            "fasd" => Ok(Condition::Fasd),
            other => Err(ConfigError::UnknownCondition(other.to_string())),
        }
    }
}

/// Prior and evidence-key weights of one condition's likelihood model.
#[derive(Debug, Clone)]
pub struct ConditionWeights {
    pub prior: f64,
    pub age_bands: Vec<AgeBandPrior>,
    pub weights: BTreeMap<EvidenceKey, f64>,
}

pub fn domain_weights(condition: Condition) -> ConditionWeights {
    use EvidenceKey::*;

    match condition {
        Condition::Asd => weights(
            -2.0,
            &[(35, -1.6), (71, -1.8)],
            &[
                (A1, 0.55),
                (A2, 0.5),
                (A3, 0.5),
                (B1, 0.35),
                (B2, 0.35),
                (B3, 0.3),
                (B4, 0.3),
                (OnsetEarly, 0.8),
                (Impairment, 0.7),
                (Masking, 0.3),
                (LangDisorder, -0.4),
                (IntellectualDisability, -0.2),
                (AltTrauma, -0.6),
                (AltAdhd, -0.5),
                (AltAnxiety, -0.4),
                (AltOther, -0.3),
            ],
        ),
        Condition::Adhd => weights(
            -1.8,
            &[],
            &[
                (A1, -0.1),
                (A2, -0.1),
                (A3, -0.1),
                (B3, 0.1),
                (OnsetEarly, 0.3),
                (Impairment, 0.4),
                (AltAdhd, 2.2),
                (AltAnxiety, 0.2),
                (AltTrauma, 0.3),
            ],
        ),
        Condition::Id => weights(
            -2.2,
            &[],
            &[
                (OnsetEarly, 0.4),
                (Impairment, 0.6),
                (LangDisorder, 0.3),
                (IntellectualDisability, 2.0),
            ],
        ),
        Condition::Fasd => weights(
            -2.5,
            &[],
            &[
                (Impairment, 0.5),
                (IntellectualDisability, 0.6),
                (AltTrauma, 0.3),
                (AltAdhd, 0.4),
                (AltOther, 1.5),
            ],
        ),
    }
}

fn weights(prior: f64, age_bands: &[(i32, f64)], rows: &[(EvidenceKey, f64)]) -> ConditionWeights {
    ConditionWeights {
        prior,
        age_bands: age_bands
            .iter()
            .map(|&(max_age_months, prior)| AgeBandPrior {
                max_age_months,
                prior,
            })
            .collect(),
        weights: rows.iter().copied().collect(),
    }
}

/// instrument id -> domain key -> severity -> weight.
pub type WeightMatrix = BTreeMap<String, BTreeMap<String, BTreeMap<String, f64>>>;

/// Severity weights for one condition across the instrument catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SeverityTable {
    pub condition: Condition,
    pub prior: f64,
    /// Added when the clinician flags this condition as a differential.
    pub flag_weight: f64,
    pub weights: WeightMatrix,
}

impl SeverityTable {
    /// Empty table sharing the likelihood model's prior for `condition`.
    fn new(condition: Condition, flag_weight: f64) -> Self {
        Self {
            condition,
            prior: domain_weights(condition).prior,
            flag_weight,
            weights: WeightMatrix::new(),
        }
    }

    /// Apply the same severity weights to each of `domains`.
    fn rows(mut self, instrument_id: &str, domains: &[&str], bands: &[(&str, f64)]) -> Self {
        let panel = self.weights.entry(instrument_id.to_string()).or_default();
        for domain in domains {
            let row = panel.entry(domain.to_string()).or_default();
            for (severity, weight) in bands {
                row.insert(severity.to_string(), *weight);
            }
        }
        self
    }

    pub fn weight(&self, instrument_id: &str, domain_key: &str, severity: &str) -> Option<f64> {
        self.weights
            .get(instrument_id)?
            .get(domain_key)?
            .get(severity)
            .copied()
    }
}

const SRS2_ALL: &[&str] = &["awareness", "cognition", "communication", "motivation", "rrb"];
const ABAS3_ALL: &[&str] = &["conceptual", "social", "practical"];
const SENSORY_ALL: &[&str] = &["seeking", "avoiding", "sensitivity", "registration"];

pub fn severity_table(condition: Condition) -> SeverityTable {
    let low: &[(&str, f64)] = &[("Extremely Low", 0.3), ("Very Low", 0.3)];

    match condition {
        Condition::Asd => SeverityTable::new(condition, 0.0)
            .rows(ids::SRS2, SRS2_ALL, &[("Mild", 0.2), ("Moderate", 0.5), ("Severe", 0.8)])
            .rows(
                ids::ADOS2,
                &["social_affect", "rrb", "overall"],
                &[("Non-spectrum", -0.6), ("Autism Spectrum", 0.8), ("Autism", 1.2)],
            )
            .rows(
                ids::ADI_R,
                &["social", "communication", "rrb"],
                &[("Below cutoff", -0.3), ("Meets cutoff", 0.7)],
            )
            .rows(ids::ADI_R, &["onset"], &[("Meets cutoff", 0.5)])
            .rows(
                ids::ASRS,
                &["social_communication", "unusual_behaviors", "dsm5"],
                &[("Slightly Elevated", 0.2), ("Elevated", 0.5), ("Very Elevated", 0.8)],
            )
            .rows(
                ids::SENSORY_PROFILE2,
                SENSORY_ALL,
                &[("More Than Others", 0.15), ("Much More Than Others", 0.3)],
            )
            .rows(ids::ABAS3, &["social"], low)
            .rows(ids::VINELAND3, &["socialization"], low),

        Condition::Adhd => SeverityTable::new(condition, 1.5)
            .rows(
                ids::ASRS,
                &["self_regulation"],
                &[("Slightly Elevated", 0.3), ("Elevated", 0.8), ("Very Elevated", 1.2)],
            )
            .rows(
                ids::WISC5,
                &["wmi", "psi"],
                &[("Extremely Low", 0.5), ("Very Low", 0.5), ("Low Average", 0.3)],
            )
            .rows(ids::SRS2, SRS2_ALL, &[("Mild", 0.1)])
            .rows(
                ids::SENSORY_PROFILE2,
                &["seeking"],
                &[("More Than Others", 0.3), ("Much More Than Others", 0.5)],
            )
            .rows(
                ids::SENSORY_PROFILE2,
                &["registration"],
                &[("Less Than Others", 0.2), ("Much Less Than Others", 0.3)],
            )
            .rows(ids::ADOS2, &["overall"], &[("Non-spectrum", 0.3)]),

        Condition::Id => SeverityTable::new(condition, 1.5)
            .rows(
                ids::WISC5,
                &["fsiq"],
                &[("Extremely Low", 2.0), ("Very Low", 1.0), ("Low Average", 0.2)],
            )
            .rows(ids::WISC5, &["vci", "fri"], &[("Extremely Low", 0.5), ("Very Low", 0.3)])
            .rows(
                ids::ABAS3,
                ABAS3_ALL,
                &[("Extremely Low", 1.0), ("Very Low", 0.6), ("Low Average", 0.1)],
            )
            .rows(ids::VINELAND3, &["abc"], &[("Extremely Low", 1.0), ("Very Low", 0.6)])
            .rows(
                ids::VINELAND3,
                &["communication", "daily_living", "socialization", "motor"],
                &[("Extremely Low", 0.3), ("Very Low", 0.2)],
            ),

        Condition::Fasd => SeverityTable::new(condition, 2.0)
            .rows(
                ids::WISC5,
                &["wmi", "psi", "fri"],
                &[("Extremely Low", 0.4), ("Very Low", 0.3), ("Low Average", 0.1)],
            )
            .rows(ids::ABAS3, ABAS3_ALL, &[("Extremely Low", 0.4), ("Very Low", 0.3)])
            .rows(ids::ASRS, &["self_regulation"], &[("Elevated", 0.4), ("Very Elevated", 0.6)])
            .rows(
                ids::SENSORY_PROFILE2,
                SENSORY_ALL,
                &[("Much More Than Others", 0.2), ("Much Less Than Others", 0.2)],
            ),
    }
}

/// One selected severity's share of a condition score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Contribution {
    pub instrument_id: String,
    pub domain_key: String,
    pub severity: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConditionScore {
    pub condition: Condition,
    pub lp: f64,
    pub p: f64,
    pub flagged: bool,
    pub contributions: Vec<Contribution>,
}

/// Score one condition's severity table against the form.
pub fn score_condition(table: &SeverityTable, form: &FormState) -> ConditionScore {
    let mut contributions = Vec::new();
    for instrument_id in form.panels.keys() {
        for (domain_key, severity) in form.selections(instrument_id) {
            if let Some(weight) = table.weight(instrument_id, domain_key, severity) {
                contributions.push(Contribution {
                    instrument_id: instrument_id.clone(),
                    domain_key: domain_key.to_string(),
                    severity: severity.to_string(),
                    weight,
                });
            }
        }
    }

    let flagged = table.condition.flagged(form);
    let flag = if flagged { table.flag_weight } else { 0.0 };
    let lp = table.prior + flag + contributions.iter().map(|c| c.weight).sum::<f64>();

    ConditionScore {
        condition: table.condition,
        lp,
        p: sigmoid(lp),
        flagged,
        contributions,
    }
}

/// Score every condition and rank them by probability, highest first.
pub fn condition_profile(form: &FormState) -> Vec<ConditionScore> {
    let mut scores: Vec<_> = Condition::ALL
        .into_iter()
        .map(|c| score_condition(&severity_table(c), form))
        .collect();
    scores.sort_by(|a, b| b.p.total_cmp(&a.p).then(a.condition.cmp(&b.condition)));
    scores
}
