use thiserror::Error;
use uuid::Uuid;

/// Core error type surfaced at the component boundaries.
/// Input-shape problems fail fast here instead of propagating a confusing
/// downstream panic.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Duplicate record key: {0}")]
    DuplicateKey(Uuid),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
