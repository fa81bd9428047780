use crate::scoring::{Domain, ScoreRange, ScoreType, CLASSIFICATION_BANDS};
use crate::{ids, Instrument};

/// ABAS-3: Adaptive Behavior Assessment System, Third Edition.
/// Conceptual, Social and Practical adaptive domains (standard scores).
pub struct Abas3;

impl Instrument for Abas3 {
    fn id(&self) -> &str {
        ids::ABAS3
    }

    fn name(&self) -> &str {
        "ABAS-3"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            [
                ("conceptual", "Conceptual"),
                ("social", "Social"),
                ("practical", "Practical"),
            ]
            .into_iter()
            .map(|(key, label)| {
                Domain::new(
                    key,
                    label,
                    CLASSIFICATION_BANDS,
                    ScoreType::Standard,
                    ScoreRange::STANDARD,
                )
            })
            .collect()
        });
        &DOMAINS
    }
}
