use crate::scoring::{Domain, ScoreRange, ScoreType, CLASSIFICATION_BANDS};
use crate::{ids, Instrument};

/// WISC-V: Wechsler Intelligence Scale for Children, Fifth Edition.
/// Five primary index scores + Full Scale IQ (standard scores, mean 100).
pub struct Wisc5;

impl Instrument for Wisc5 {
    fn id(&self) -> &str {
        ids::WISC5
    }

    fn name(&self) -> &str {
        "WISC-V"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let index = ScoreRange {
                min: 45.0,
                max: 155.0,
                step: Some(1.0),
            };

            [
                ("vci", "Verbal Comprehension Index"),
                ("vsi", "Visual Spatial Index"),
                ("fri", "Fluid Reasoning Index"),
                ("wmi", "Working Memory Index"),
                ("psi", "Processing Speed Index"),
                ("fsiq", "Full Scale IQ"),
            ]
            .into_iter()
            .map(|(key, label)| {
                Domain::new(key, label, CLASSIFICATION_BANDS, ScoreType::Standard, index)
            })
            .collect()
        });
        &DOMAINS
    }
}
