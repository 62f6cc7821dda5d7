use chrono::NaiveDate;
use tally_core::domain::{Category, TransactionRecord};

/// Builds a validated record for an exact calendar day.
pub fn record(
    year: i32,
    month: u32,
    day: u32,
    amount: f64,
    category: Category,
) -> TransactionRecord {
    let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date");
    TransactionRecord::new(date, amount, category).expect("valid record")
}
