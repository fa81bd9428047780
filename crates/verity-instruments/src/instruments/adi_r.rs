use crate::scoring::{Domain, ScoreRange, ScoreType, ADI_BANDS};
use crate::{ids, Instrument};

/// ADI-R: Autism Diagnostic Interview, Revised.
/// Caregiver interview; algorithm domains are compared against fixed cutoffs.
pub struct AdiR;

impl Instrument for AdiR {
    fn id(&self) -> &str {
        ids::ADI_R
    }

    fn name(&self) -> &str {
        "ADI-R"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            [
                ("social", "Reciprocal Social Interaction", 30.0),
                ("communication", "Communication", 26.0),
                ("rrb", "Restricted, Repetitive, and Stereotyped Behavior", 12.0),
                ("onset", "Abnormality Evident at or Before 36 Months", 5.0),
            ]
            .into_iter()
            .map(|(key, label, max)| {
                Domain::new(
                    key,
                    label,
                    ADI_BANDS,
                    ScoreType::Raw,
                    ScoreRange {
                        min: 0.0,
                        max,
                        step: Some(1.0),
                    },
                )
            })
            .collect()
        });
        &DOMAINS
    }

    fn headline(&self) -> Option<&Domain> {
        self.domain("social")
    }
}
