use crate::scoring::{Domain, ScoreRange, ScoreType, SENSORY_BANDS};
use crate::{ids, Instrument};

/// Sensory Profile 2. Quadrant raw scores, classified against same-age peers.
pub struct SensoryProfile2;

impl Instrument for SensoryProfile2 {
    fn id(&self) -> &str {
        ids::SENSORY_PROFILE2
    }

    fn name(&self) -> &str {
        "Sensory Profile 2"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let quadrant = ScoreRange {
                min: 0.0,
                max: 95.0,
                step: Some(1.0),
            };

            [
                ("seeking", "Seeking/Seeker"),
                ("avoiding", "Avoiding/Avoider"),
                ("sensitivity", "Sensitivity/Sensor"),
                ("registration", "Registration/Bystander"),
            ]
            .into_iter()
            .map(|(key, label)| Domain::new(key, label, SENSORY_BANDS, ScoreType::Raw, quadrant))
            .collect()
        });
        &DOMAINS
    }
}
