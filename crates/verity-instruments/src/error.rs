use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("unknown domain '{domain_key}' for instrument '{instrument_id}'")]
    UnknownDomain {
        instrument_id: String,
        domain_key: String,
    },
}
