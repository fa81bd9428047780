use crate::scoring::{Domain, ScoreRange, ScoreType, RATING_BANDS};
use crate::{ids, Instrument};

/// ASRS: Autism Spectrum Rating Scales.
/// Parent and educator rating scales, T-scores (mean 50, SD 10).
pub struct Asrs;

impl Instrument for Asrs {
    fn id(&self) -> &str {
        ids::ASRS
    }

    fn name(&self) -> &str {
        "ASRS"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            [
                ("social_communication", "Social/Communication"),
                ("unusual_behaviors", "Unusual Behaviors"),
                ("self_regulation", "Self-Regulation"),
                ("dsm5", "DSM-5 Scale"),
            ]
            .into_iter()
            .map(|(key, label)| {
                Domain::new(key, label, RATING_BANDS, ScoreType::TScore, ScoreRange::T_SCORE)
            })
            .collect()
        });
        &DOMAINS
    }
}
