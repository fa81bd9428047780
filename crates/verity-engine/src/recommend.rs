use crate::gate::DatasetStatus;
use crate::model::ModelResult;
use crate::support::SupportEstimate;

pub const COLLECT_MINIMUM_DATASET: &str = "Minimum dataset not met: collect the required \
    standardized instruments, an adaptive measure, a developmental history and all seven \
    clinician observation ratings before interpreting the likelihood estimate.";

pub const PROCEED_WITH_FORMULATION: &str = "Evidence meets the decision threshold: proceed \
    with a full diagnostic formulation against DSM-5-TR criteria.";

pub const PLAN_SUPPORTS: &str = "Adaptive functioning indicates high support needs: begin \
    support planning alongside the diagnostic formulation.";

pub const REVIEW_LATER: &str = "Risk is below the decision threshold: document findings and \
    re-review in 3-6 months, or sooner if new concerns arise.";

/// Templated recommendations for the current result, in display order.
pub fn recommendations(
    dataset: &DatasetStatus,
    model: &ModelResult,
    support: SupportEstimate,
) -> Vec<String> {
    if !dataset.passes {
        return vec![COLLECT_MINIMUM_DATASET.to_string()];
    }

    if model.p >= model.cut {
        let mut out = vec![PROCEED_WITH_FORMULATION.to_string()];
        if support == SupportEstimate::High {
            out.push(PLAN_SUPPORTS.to_string());
        }
        out
    } else {
        vec![REVIEW_LATER.to_string()]
    }
}
