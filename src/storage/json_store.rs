use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::{TransactionRecord, TransactionRow};

use super::{RecordStore, Result};

const TMP_SUFFIX: &str = "tmp";

/// File-backed store keeping all records in a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonStore {
    /// Loads and classifies every stored row. A row with an unknown category
    /// identifier or a negative amount fails the whole load.
    fn load(&self) -> Result<Vec<TransactionRecord>> {
        let data = fs::read_to_string(&self.path)?;
        let rows: Vec<TransactionRow> = serde_json::from_str(&data)?;
        let records = rows
            .iter()
            .map(TransactionRecord::from_row)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            "loaded {} transaction records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn save(&self, records: &[TransactionRecord]) -> Result<()> {
        let rows: Vec<TransactionRow> = records.iter().map(TransactionRow::from).collect();
        let json = serde_json::to_string_pretty(&rows)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(
            "saved {} transaction records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonStore::new(temp.path().join("records.json"));
        (store, temp)
    }

    fn sample_records() -> Vec<TransactionRecord> {
        vec![
            TransactionRecord::new(
                chrono::NaiveDate::from_ymd_opt(2025, 1, 5).expect("valid date"),
                150.0,
                Category::Income,
            )
            .expect("valid record"),
            TransactionRecord::new(
                chrono::NaiveDate::from_ymd_opt(2025, 1, 10).expect("valid date"),
                30.0,
                Category::Expense,
            )
            .expect("valid record"),
        ]
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (store, _guard) = store_with_temp_dir();
        let records = sample_records();
        store.save(&records).expect("save records");
        let loaded = store.load().expect("load records");
        assert_eq!(loaded, records);
    }

    #[test]
    fn save_leaves_no_temporary_file_behind() {
        let (store, _guard) = store_with_temp_dir();
        store.save(&sample_records()).expect("save records");
        assert!(!tmp_path(store.path()).exists());
    }
}
