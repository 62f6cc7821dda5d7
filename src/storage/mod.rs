pub mod json_store;

use crate::{domain::TransactionRecord, errors::TallyError};

pub type Result<T> = std::result::Result<T, TallyError>;

/// Abstraction over persistence backends capable of storing transaction records.
pub trait RecordStore: Send + Sync {
    fn load(&self) -> Result<Vec<TransactionRecord>>;
    fn save(&self, records: &[TransactionRecord]) -> Result<()>;
}

pub use json_store::JsonStore;
