use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configVersion {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u64, supported: u32 },

    #[error("configVersion must be a non-negative integer, got {0}")]
    InvalidVersion(String),

    #[error("config is not a JSON object")]
    NotAnObject,

    #[error("unknown condition: {0}")]
    UnknownCondition(String),

    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown domain '{domain_key}' for instrument '{instrument_id}'")]
    UnknownDomain {
        instrument_id: String,
        domain_key: String,
    },

    #[error("severity '{severity}' is not defined for {instrument_id}/{domain_key}")]
    UnknownSeverity {
        instrument_id: String,
        domain_key: String,
        severity: String,
    },

    #[error("age band priors must be sorted by max age: {next} months follows {previous}")]
    UnsortedAgeBands { previous: i32, next: i32 },

    #[error("non-finite value for {0}")]
    NonFinite(String),
}
