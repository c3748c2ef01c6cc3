//! Filesystem JSON implementation of the record store contract.
//!
//! Persists ledger and expense records as a single JSON document with
//! atomic tmp-file + rename writes. Stands in for the remote store during
//! development and in the test suites; the core only ever talks through
//! [`RecordStore`].

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentbook_core::{CoreError, CoreResult, RecordStore};
use rentbook_domain::{ExpenseEntry, Identifiable, LedgerEntry, ReportWindow};

const RECORDS_FILE: &str = "records.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Records {
    #[serde(default)]
    entries: Vec<LedgerEntry>,
    #[serde(default)]
    expenses: Vec<ExpenseEntry>,
}

/// Record store backed by one JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonRecordStore {
    path: PathBuf,
}

impl JsonRecordStore {
    /// Opens (or prepares) a store at an explicit file path.
    pub fn new(path: PathBuf) -> CoreResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(transport)?;
        }
        Ok(Self { path })
    }

    /// Opens the store under `root`, using the conventional file name.
    pub fn with_data_root(root: &Path) -> CoreResult<Self> {
        fs::create_dir_all(root).map_err(transport)?;
        Ok(Self {
            path: root.join(RECORDS_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> CoreResult<Records> {
        if !self.path.exists() {
            return Ok(Records::default());
        }
        let data = fs::read_to_string(&self.path).map_err(transport)?;
        serde_json::from_str(&data).map_err(|err| CoreError::Transport(err.to_string()))
    }

    fn save(&self, records: &Records) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|err| CoreError::Transport(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path).map_err(transport)?;
        Ok(())
    }
}

impl RecordStore for JsonRecordStore {
    fn ledger_entries(&self) -> CoreResult<Vec<LedgerEntry>> {
        Ok(self.load()?.entries)
    }

    fn ledger_entries_in(&self, window: ReportWindow) -> CoreResult<Vec<LedgerEntry>> {
        Ok(self
            .load()?
            .entries
            .into_iter()
            .filter(|entry| window.contains(entry.date))
            .collect())
    }

    fn put_ledger_entry(&self, entry: &LedgerEntry) -> CoreResult<()> {
        let mut records = self.load()?;
        if let Some(existing) = records.entries.iter_mut().find(|e| e.id == entry.id) {
            *existing = entry.clone();
        } else {
            records.entries.push(entry.clone());
        }
        self.save(&records)
    }

    fn delete_ledger_entry(&self, id: Uuid) -> CoreResult<()> {
        let mut records = self.load()?;
        if !remove_by_id(&mut records.entries, id) {
            return Err(CoreError::NotFound(format!("ledger entry {id}")));
        }
        self.save(&records)
    }

    fn delete_room(&self, room: u32) -> CoreResult<usize> {
        let mut records = self.load()?;
        let before = records.entries.len();
        records.entries.retain(|entry| entry.room_number != room);
        let removed = before - records.entries.len();
        if removed == 0 {
            return Err(CoreError::NotFound(format!("room {room}")));
        }
        self.save(&records)?;
        Ok(removed)
    }

    fn expenses(&self) -> CoreResult<Vec<ExpenseEntry>> {
        Ok(self.load()?.expenses)
    }

    fn expenses_in(&self, window: ReportWindow) -> CoreResult<Vec<ExpenseEntry>> {
        Ok(self
            .load()?
            .expenses
            .into_iter()
            .filter(|expense| window.contains(expense.date))
            .collect())
    }

    fn create_expense(&self, entry: &ExpenseEntry) -> CoreResult<()> {
        let mut records = self.load()?;
        records.expenses.push(entry.clone());
        self.save(&records)
    }

    fn delete_expense(&self, id: Uuid) -> CoreResult<()> {
        let mut records = self.load()?;
        if !remove_by_id(&mut records.expenses, id) {
            return Err(CoreError::NotFound(format!("expense {id}")));
        }
        self.save(&records)
    }

    fn clear_reports(&self) -> CoreResult<()> {
        self.save(&Records::default())
    }
}

/// Removes the record carrying `id`; reports whether anything was removed.
fn remove_by_id<T: Identifiable>(items: &mut Vec<T>, id: Uuid) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

fn transport(err: std::io::Error) -> CoreError {
    CoreError::Transport(err.to_string())
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

fn write_atomic(path: &Path, data: &str) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(transport)?;
    }
    let mut file = File::create(path).map_err(transport)?;
    file.write_all(data.as_bytes()).map_err(transport)?;
    file.flush().map_err(transport)?;
    Ok(())
}
