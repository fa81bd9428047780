use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown evidence key: {0}")]
    UnknownEvidenceKey(String),

    #[error("date arithmetic failed: {0}")]
    Date(#[from] jiff::Error),

    #[error("date of birth {date_of_birth} is after assessment date {assessment_date}")]
    NegativeAge {
        date_of_birth: jiff::civil::Date,
        assessment_date: jiff::civil::Date,
    },
}
