//! verity-instruments
//!
//! Label taxonomy for the supported rating instruments. Pure data: each
//! instrument declares its scorable domains, the severity labels a clinician
//! may select per domain, and the valid range of its numeric scores.

pub mod error;
pub mod instruments;
pub mod scoring;

use std::collections::BTreeMap;

use error::InstrumentError;
use scoring::{Domain, ScoreEntry, ValidationError};

/// Stable instrument identifiers, as used for form-state panel keys.
pub mod ids {
    pub const SRS2: &str = "srs2";
    pub const ABAS3: &str = "abas3";
    pub const WISC5: &str = "wisc5";
    pub const VINELAND3: &str = "vineland3";
    pub const ADOS2: &str = "ados2";
    pub const ADI_R: &str = "adi_r";
    pub const ASRS: &str = "asrs";
    pub const SENSORY_PROFILE2: &str = "sensory_profile2";
    pub const MIGDAS2: &str = "migdas2";
}

/// Trait implemented by each clinical rating instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "srs2", "abas3").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "SRS-2", "ABAS-3").
    fn name(&self) -> &str;

    /// The scorable domains of this instrument.
    fn domains(&self) -> &[Domain];

    fn domain(&self, key: &str) -> Option<&Domain> {
        self.domains().iter().find(|d| d.key == key)
    }

    /// The domain a single free-form score for this instrument is read
    /// against. Defaults to the last (composite) domain.
    fn headline(&self) -> Option<&Domain> {
        self.domains().last()
    }

    /// Severity labels selectable for `domain_key`.
    fn severities(&self, domain_key: &str) -> Result<&[String], InstrumentError> {
        self.domain(domain_key)
            .map(|d| d.severities.as_slice())
            .ok_or_else(|| InstrumentError::UnknownDomain {
                instrument_id: self.id().to_string(),
                domain_key: domain_key.to_string(),
            })
    }

    /// Validate a set of numeric score entries against this instrument's ranges.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for entry in scores {
            if let Some(domain) = self.domain(&entry.domain_key)
                && !domain.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    domain_key: entry.domain_key.clone(),
                    value: entry.value,
                    expected_range: domain.range,
                    score_type: domain.score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        domain.label,
                        entry.value,
                        domain.range.min,
                        domain.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Format severity selections as structured text for a report.
    fn to_structured_input(&self, selections: &BTreeMap<String, String>) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for domain in self.domains() {
            if let Some(severity) = selections.get(&domain.key).filter(|s| !s.trim().is_empty()) {
                output.push_str(&format!("- {}: {}\n", domain.label, severity.trim()));
            }
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::srs2::Srs2),
        Box::new(instruments::abas3::Abas3),
        Box::new(instruments::wisc5::Wisc5),
        Box::new(instruments::vineland3::Vineland3),
        Box::new(instruments::ados2::Ados2),
        Box::new(instruments::adi_r::AdiR),
        Box::new(instruments::asrs::Asrs),
        Box::new(instruments::sensory_profile2::SensoryProfile2),
        Box::new(instruments::migdas2::Migdas2),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Look up an instrument by its display name (e.g. "Vineland-3").
pub fn find_by_name(name: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.name() == name)
}
