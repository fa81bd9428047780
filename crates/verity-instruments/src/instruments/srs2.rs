use crate::scoring::{Domain, ScoreRange, ScoreType, SRS2_BANDS};
use crate::{ids, Instrument};

/// SRS-2: Social Responsiveness Scale, Second Edition.
/// Social Awareness, Cognition, Communication, Motivation, RRBs subscales.
/// T-scores: mean 50, SD 10. Higher = more difficulty.
pub struct Srs2;

impl Instrument for Srs2 {
    fn id(&self) -> &str {
        ids::SRS2
    }

    fn name(&self) -> &str {
        "SRS-2"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let t_score = ScoreRange {
                min: 30.0,
                max: 100.0,
                step: Some(1.0),
            };

            vec![
                subscale("awareness", "Social Awareness", t_score),
                subscale("cognition", "Social Cognition", t_score),
                subscale("communication", "Social Communication", t_score),
                subscale("motivation", "Social Motivation", t_score),
                subscale("rrb", "Restricted Interests and Repetitive Behavior", t_score),
            ]
        });
        &DOMAINS
    }
}

fn subscale(key: &str, label: &str, range: ScoreRange) -> Domain {
    Domain::new(key, label, SRS2_BANDS, ScoreType::TScore, range)
}
