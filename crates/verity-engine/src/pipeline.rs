use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use verity_core::evidence::EvidenceSet;
use verity_core::form::FormState;

use crate::aggregate::aggregate;
use crate::config::EngineConfig;
use crate::gate::{check_sufficiency, DatasetStatus};
use crate::model::{score, ModelResult};
use crate::recommend::recommendations;
use crate::support::{support_estimate, SupportEstimate};
use crate::tables::{condition_profile, Condition, ConditionScore};

/// Everything derived from one form snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Evaluation {
    pub condition: Condition,
    pub age_months: Option<i32>,
    /// Prior actually used, after age-band resolution.
    pub prior: f64,
    pub evidence: EvidenceSet,
    pub model: ModelResult,
    pub dataset: DatasetStatus,
    pub support: SupportEstimate,
    pub recommendations: Vec<String>,
    pub differential: Vec<ConditionScore>,
}

/// Run the full pipeline over one snapshot.
pub fn evaluate_form(config: &EngineConfig, form: &FormState) -> Evaluation {
    let age_months = match form.age_months() {
        Ok(age) => age,
        Err(e) => {
            debug!(error = %e, "age unavailable, using base prior");
            None
        }
    };
    let prior = config.prior_for_age(age_months);

    let evidence = aggregate(config, form);
    let model = score(&config.domain_weights, prior, &evidence, form.risk_tolerance);
    let dataset = check_sufficiency(config, form);
    let support = support_estimate(form);
    let recommendations = recommendations(&dataset, &model, support);
    let differential = condition_profile(form);

    debug!(
        condition = ?config.condition,
        prior,
        lp = model.lp,
        p = model.p,
        cut = model.cut,
        dataset_passes = dataset.passes,
        support = %support,
        "evaluation complete"
    );

    Evaluation {
        condition: config.condition,
        age_months,
        prior,
        evidence,
        model,
        dataset,
        support,
        recommendations,
        differential,
    }
}
