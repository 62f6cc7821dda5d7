use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::month::MonthKey;
use crate::errors::TallyError;

/// A single dated monetary event, validated and classified.
///
/// Records are immutable once created. `amount` is a non-negative magnitude;
/// direction of flow is carried by `category`, never by sign. `id` is used
/// only for identity, never for ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub occurred_on: NaiveDate,
    pub amount: f64,
    pub category: Category,
}

impl TransactionRecord {
    /// Creates a record with a fresh id, rejecting negative amounts.
    pub fn new(
        occurred_on: NaiveDate,
        amount: f64,
        category: Category,
    ) -> Result<Self, TallyError> {
        if amount < 0.0 {
            return Err(TallyError::InvalidAmount {
                amount,
                record_id: None,
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            occurred_on,
            amount,
            category,
        })
    }

    /// Validates and classifies a stored row into a record.
    ///
    /// This is the ingestion boundary: the row's raw category identifier is
    /// resolved here, and any failure carries the row's id.
    pub fn from_row(row: &TransactionRow) -> Result<Self, TallyError> {
        let category =
            Category::from_identifier(&row.category).map_err(|err| err.with_record(row.id))?;
        if row.amount < 0.0 {
            return Err(TallyError::InvalidAmount {
                amount: row.amount,
                record_id: Some(row.id),
            });
        }
        Ok(Self {
            id: row.id,
            occurred_on: row.occurred_on,
            amount: row.amount,
            category,
        })
    }

    /// Calendar month this record falls in.
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.occurred_on)
    }
}

impl TryFrom<TransactionRow> for TransactionRecord {
    type Error = TallyError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        Self::from_row(&row)
    }
}

/// The unvalidated stored shape of a record.
///
/// `category` is still a raw identifier; converting into
/// [`TransactionRecord`] is the only way into the typed model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRow {
    pub id: Uuid,
    pub occurred_on: NaiveDate,
    pub amount: f64,
    pub category: String,
}

impl From<&TransactionRecord> for TransactionRow {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            id: record.id,
            occurred_on: record.occurred_on,
            amount: record.amount,
            category: record.category.identifier().to_string(),
        }
    }
}
