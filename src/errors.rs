use thiserror::Error;
use uuid::Uuid;

/// Error type covering classification, validation, and persistence failures.
#[derive(Debug, Error)]
pub enum TallyError {
    /// A raw category identifier matched none of the closed category set.
    #[error("Unknown category identifier `{identifier}`{}", record_suffix(.record_id))]
    UnknownCategory {
        identifier: String,
        record_id: Option<Uuid>,
    },
    /// A transaction amount was negative; direction of flow is carried by the
    /// category, never by sign.
    #[error("Invalid amount {amount}: must be non-negative{}", record_suffix(.record_id))]
    InvalidAmount {
        amount: f64,
        record_id: Option<Uuid>,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl TallyError {
    /// Attaches the offending record's id to a classification or validation
    /// error, for diagnostics at the ingestion boundary.
    pub fn with_record(self, id: Uuid) -> Self {
        match self {
            TallyError::UnknownCategory { identifier, .. } => TallyError::UnknownCategory {
                identifier,
                record_id: Some(id),
            },
            TallyError::InvalidAmount { amount, .. } => TallyError::InvalidAmount {
                amount,
                record_id: Some(id),
            },
            other => other,
        }
    }
}

fn record_suffix(record_id: &Option<Uuid>) -> String {
    match record_id {
        Some(id) => format!(" (record {id})"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;
