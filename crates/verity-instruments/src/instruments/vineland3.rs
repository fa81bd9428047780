use crate::scoring::{Domain, ScoreRange, ScoreType, CLASSIFICATION_BANDS};
use crate::{ids, Instrument};

/// Vineland-3: Vineland Adaptive Behavior Scales, Third Edition.
/// Communication, Daily Living Skills, Socialization, Motor Skills domains
/// + Adaptive Behavior Composite. Domain standard scores, mean 100.
pub struct Vineland3;

impl Instrument for Vineland3 {
    fn id(&self) -> &str {
        ids::VINELAND3
    }

    fn name(&self) -> &str {
        "Vineland-3"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let standard = ScoreRange {
                min: 20.0,
                max: 160.0,
                step: Some(1.0),
            };

            vec![
                domain("communication", "Communication", standard),
                domain("daily_living", "Daily Living Skills", standard),
                domain("socialization", "Socialization", standard),
                domain("motor", "Motor Skills", standard),
                domain("abc", "Adaptive Behavior Composite", standard),
            ]
        });
        &DOMAINS
    }
}

fn domain(key: &str, label: &str, range: ScoreRange) -> Domain {
    Domain::new(key, label, CLASSIFICATION_BANDS, ScoreType::Standard, range)
}
