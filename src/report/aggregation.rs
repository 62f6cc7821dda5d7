//! Monthly aggregation of transaction records for chart consumption.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Category, MonthKey, TransactionRecord, TransactionRow};
use crate::errors::TallyError;

/// One summarized (month, category, total) point, ready for charting.
///
/// Points are derived values: recomputed from scratch on every aggregation
/// run, never mutated in place, and without back-references to source
/// records. `id` is opaque and not a dedup key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyDataPoint {
    pub id: Uuid,
    pub month: MonthKey,
    /// First day of the summarized month; chart x-axis position.
    pub date: NaiveDate,
    pub category: Category,
    pub total: f64,
}

impl MonthlyDataPoint {
    fn new(month: MonthKey, category: Category, total: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            month,
            date: month.first_day(),
            category,
            total,
        }
    }
}

/// Groups transaction records by calendar month and category.
pub struct MonthlyAggregator;

impl MonthlyAggregator {
    /// Buckets validated records into one point per observed
    /// (month, category) pair.
    ///
    /// Output is sorted ascending by month, then by the fixed category order
    /// within a month, regardless of input order. Totals are plain sums of
    /// the record amounts; rounding belongs to the presentation layer. Pairs
    /// with no records produce no point.
    pub fn aggregate(records: &[TransactionRecord]) -> Vec<MonthlyDataPoint> {
        let mut buckets: BTreeMap<(MonthKey, Category), f64> = BTreeMap::new();
        for record in records {
            *buckets
                .entry((record.month(), record.category))
                .or_insert(0.0) += record.amount;
        }
        buckets
            .into_iter()
            .map(|((month, category), total)| MonthlyDataPoint::new(month, category, total))
            .collect()
    }

    /// Classifies raw rows, then aggregates them.
    ///
    /// Fails on the first row whose category identifier is unknown or whose
    /// amount is negative, carrying the offending identifier and record id.
    /// A failed call produces no output at all, not even for valid rows.
    pub fn aggregate_rows(rows: &[TransactionRow]) -> Result<Vec<MonthlyDataPoint>, TallyError> {
        let records = rows
            .iter()
            .map(TransactionRecord::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::aggregate(&records))
    }
}
