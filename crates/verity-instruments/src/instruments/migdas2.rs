use crate::scoring::Domain;
use crate::{ids, Instrument};

/// MIGDAS-2: Monteiro Interview Guidelines for Diagnosing the Autism
/// Spectrum. Narrative and qualitative; the only scored output is the
/// overall consistency judgement carried on the form state, so there are no
/// severity domains.
pub struct Migdas2;

impl Instrument for Migdas2 {
    fn id(&self) -> &str {
        ids::MIGDAS2
    }

    fn name(&self) -> &str {
        "MIGDAS-2"
    }

    fn domains(&self) -> &[Domain] {
        &[]
    }
}
