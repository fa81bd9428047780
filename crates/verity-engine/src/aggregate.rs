use verity_core::evidence::EvidenceSet;
use verity_core::form::{Consistency, FormState};
use verity_core::keys::{CriterionKey, EvidenceKey};
use verity_core::numeric::to_evidence_number;

use crate::config::EngineConfig;

/// Flat adjustment for a `consistent` narrative-observation rating.
pub const CONSISTENT_BOOST: f64 = 0.6;
/// Applied to A1-A3 for an `inconsistent` rating.
pub const INCONSISTENT_SOCIAL: f64 = -0.4;
/// Applied to B2-B3 for an `inconsistent` rating.
pub const INCONSISTENT_RESTRICTED: f64 = -0.3;

const CONSISTENCY_TARGETS: [EvidenceKey; 5] = [
    EvidenceKey::A1,
    EvidenceKey::A2,
    EvidenceKey::A3,
    EvidenceKey::B2,
    EvidenceKey::B3,
];

/// Reduce a form snapshot to the evidence accumulator set.
///
/// Every contribution is a plain sum, so the order of steps only affects
/// floating-point rounding. Missing or malformed inputs contribute zero.
pub fn aggregate(config: &EngineConfig, form: &FormState) -> EvidenceSet {
    let mut evidence = EvidenceSet::new();

    for key in CriterionKey::ALL {
        evidence.set(key.into(), to_evidence_number(form.observation.get(&key)));
    }

    let history = &form.history;
    let d = &form.differentials;
    let flags = [
        (EvidenceKey::OnsetEarly, history.early_onset),
        (EvidenceKey::Impairment, history.cross_context_impairment),
        (EvidenceKey::Masking, history.masking),
        (EvidenceKey::LangDisorder, d.language_disorder),
        (EvidenceKey::IntellectualDisability, d.intellectual_disability),
        (EvidenceKey::AltTrauma, d.trauma),
        (EvidenceKey::AltAdhd, d.adhd),
        (EvidenceKey::AltAnxiety, d.anxiety || d.depression),
        (
            EvidenceKey::AltOther,
            d.fasd || d.tics || !d.other.trim().is_empty(),
        ),
    ];
    for (key, flag) in flags {
        evidence.set(key, if flag { 1.0 } else { 0.0 });
    }

    for panel in &config.panels {
        for domain in &panel.domains {
            let deltas = form
                .severity(&panel.instrument_id, &domain.key)
                .and_then(|severity| domain.map_by_severity.get(severity));
            for (key, delta) in deltas.into_iter().flatten() {
                evidence.add(*key, *delta);
            }
        }
    }

    apply_consistency(&mut evidence, form.consistency);
    evidence
}

fn apply_consistency(evidence: &mut EvidenceSet, consistency: Consistency) {
    match consistency {
        Consistency::Unclear => {}
        Consistency::Consistent => {
            for key in CONSISTENCY_TARGETS {
                evidence.add(key, CONSISTENT_BOOST);
            }
        }
        Consistency::Inconsistent => {
            for key in CONSISTENCY_TARGETS {
                let delta = match key {
                    EvidenceKey::B2 | EvidenceKey::B3 => INCONSISTENT_RESTRICTED,
                    _ => INCONSISTENT_SOCIAL,
                };
                evidence.add(key, delta);
            }
        }
    }
}
