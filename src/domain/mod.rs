//! Domain models for the finance core: records, categories, month buckets.

pub mod category;
pub mod month;
pub mod transaction;

pub use category::Category;
pub use month::MonthKey;
pub use transaction::{TransactionRecord, TransactionRow};
