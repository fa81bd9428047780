use crate::scoring::{Domain, ScoreRange, ScoreType, ADOS_BANDS};
use crate::{ids, Instrument};

/// ADOS-2: Autism Diagnostic Observation Schedule, Second Edition.
/// Social Affect + RRB algorithm domains and the overall classification.
pub struct Ados2;

impl Instrument for Ados2 {
    fn id(&self) -> &str {
        ids::ADOS2
    }

    fn name(&self) -> &str {
        "ADOS-2"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![
                Domain::new(
                    "social_affect",
                    "Social Affect",
                    ADOS_BANDS,
                    ScoreType::Raw,
                    ScoreRange {
                        min: 0.0,
                        max: 28.0,
                        step: Some(1.0),
                    },
                ),
                Domain::new(
                    "rrb",
                    "Restricted and Repetitive Behavior",
                    ADOS_BANDS,
                    ScoreType::Raw,
                    ScoreRange {
                        min: 0.0,
                        max: 16.0,
                        step: Some(1.0),
                    },
                ),
                // 1-10, higher = more symptoms
                Domain::new(
                    "overall",
                    "Overall Comparison Score",
                    ADOS_BANDS,
                    ScoreType::Comparison,
                    ScoreRange {
                        min: 1.0,
                        max: 10.0,
                        step: Some(1.0),
                    },
                ),
            ]
        });
        &DOMAINS
    }
}
