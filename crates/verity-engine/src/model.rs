use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use verity_core::evidence::EvidenceSet;
use verity_core::form::RiskTolerance;
use verity_core::keys::{CriterionKey, EvidenceKey};
use verity_core::numeric::finite_or_zero;

use crate::config::EngineConfig;

/// Log-odds beyond this magnitude are clamped before the logistic transform,
/// which keeps `p` strictly inside (0, 1).
pub const LP_LIMIT: f64 = 30.0;

/// Maximum raw A1+A2+A3 observation sum (3 items x 3).
pub const SOCIAL_MAX: f64 = 9.0;
/// Maximum raw B1..B4 observation sum (4 items x 3).
pub const RESTRICTED_MAX: f64 = 12.0;

/// One weighted evidence term, kept for the explainability view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Term {
    pub key: EvidenceKey,
    pub value: f64,
    pub weight: f64,
    pub product: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Decision {
    Above,
    Below,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ModelResult {
    pub p: f64,
    pub lp: f64,
    pub p_a: f64,
    pub p_b: f64,
    pub cut: f64,
    pub decision: Decision,
    pub terms: Vec<Term>,
}

impl ModelResult {
    /// Terms ordered by absolute contribution, largest first.
    pub fn ranked_terms(&self) -> Vec<&Term> {
        let mut ranked: Vec<_> = self.terms.iter().collect();
        ranked.sort_by(|a, b| b.product.abs().total_cmp(&a.product.abs()));
        ranked
    }
}

/// Numerically safe logistic transform.
pub fn sigmoid(lp: f64) -> f64 {
    if lp.is_nan() {
        return 0.5;
    }
    let lp = lp.clamp(-LP_LIMIT, LP_LIMIT);
    if lp >= 0.0 {
        1.0 / (1.0 + (-lp).exp())
    } else {
        let e = lp.exp();
        e / (1.0 + e)
    }
}

pub fn cutpoint(tolerance: RiskTolerance) -> f64 {
    match tolerance {
        RiskTolerance::Sensitive => 0.35,
        RiskTolerance::Balanced => 0.5,
        RiskTolerance::Specific => 0.7,
    }
}

/// Apply the configured weights and prior to an evidence set.
pub fn evaluate(config: &EngineConfig, evidence: &EvidenceSet, tolerance: RiskTolerance) -> ModelResult {
    score(&config.domain_weights, config.prior, evidence, tolerance)
}

/// The likelihood model with an explicit prior, e.g. one resolved from an age band.
pub fn score(
    weights: &BTreeMap<EvidenceKey, f64>,
    prior: f64,
    evidence: &EvidenceSet,
    tolerance: RiskTolerance,
) -> ModelResult {
    let terms: Vec<Term> = weights
        .iter()
        .map(|(&key, &weight)| {
            let value = evidence.get(key);
            Term {
                key,
                value,
                weight,
                product: finite_or_zero(value * weight),
            }
        })
        .collect();

    let lp = finite_or_zero(prior) + terms.iter().map(|t| t.product).sum::<f64>();
    let p = sigmoid(lp);

    let social = evidence.criterion_sum(&CriterionKey::SOCIAL);
    let restricted = evidence.criterion_sum(&CriterionKey::RESTRICTED);
    let p_a = (social / SOCIAL_MAX).clamp(0.0, 1.0);
    let p_b = (restricted / RESTRICTED_MAX).clamp(0.0, 1.0);

    let cut = cutpoint(tolerance);
    let decision = if p >= cut { Decision::Above } else { Decision::Below };

    ModelResult {
        p,
        lp,
        p_a,
        p_b,
        cut,
        decision,
        terms,
    }
}
