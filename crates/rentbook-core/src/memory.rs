//! In-process [`RecordStore`] implementation.
//!
//! Keeps records in insertion order behind a mutex. Used by the test
//! suites and as a throwaway backend for previewing flows without a
//! configured data root.

use std::sync::{Mutex, PoisonError};

use rentbook_domain::{ExpenseEntry, Identifiable, LedgerEntry, ReportWindow};
use uuid::Uuid;

use crate::{store::RecordStore, CoreError, CoreResult};

#[derive(Debug, Default)]
struct Records {
    entries: Vec<LedgerEntry>,
    expenses: Vec<ExpenseEntry>,
}

/// Volatile record store with the same observable contract as the remote
/// one.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Records>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_records<T>(&self, f: impl FnOnce(&mut Records) -> T) -> T {
        let mut records = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut records)
    }
}

impl RecordStore for MemoryStore {
    fn ledger_entries(&self) -> CoreResult<Vec<LedgerEntry>> {
        Ok(self.with_records(|r| r.entries.clone()))
    }

    fn ledger_entries_in(&self, window: ReportWindow) -> CoreResult<Vec<LedgerEntry>> {
        Ok(self.with_records(|r| {
            r.entries
                .iter()
                .filter(|entry| window.contains(entry.date))
                .cloned()
                .collect()
        }))
    }

    fn put_ledger_entry(&self, entry: &LedgerEntry) -> CoreResult<()> {
        self.with_records(|r| {
            if let Some(existing) = r.entries.iter_mut().find(|e| e.id == entry.id) {
                *existing = entry.clone();
            } else {
                r.entries.push(entry.clone());
            }
        });
        Ok(())
    }

    fn delete_ledger_entry(&self, id: Uuid) -> CoreResult<()> {
        self.with_records(|r| {
            if remove_by_id(&mut r.entries, id) {
                Ok(())
            } else {
                Err(CoreError::NotFound(format!("ledger entry {id}")))
            }
        })
    }

    fn delete_room(&self, room: u32) -> CoreResult<usize> {
        self.with_records(|r| {
            let before = r.entries.len();
            r.entries.retain(|entry| entry.room_number != room);
            let removed = before - r.entries.len();
            if removed == 0 {
                Err(CoreError::NotFound(format!("room {room}")))
            } else {
                Ok(removed)
            }
        })
    }

    fn expenses(&self) -> CoreResult<Vec<ExpenseEntry>> {
        Ok(self.with_records(|r| r.expenses.clone()))
    }

    fn expenses_in(&self, window: ReportWindow) -> CoreResult<Vec<ExpenseEntry>> {
        Ok(self.with_records(|r| {
            r.expenses
                .iter()
                .filter(|expense| window.contains(expense.date))
                .cloned()
                .collect()
        }))
    }

    fn create_expense(&self, entry: &ExpenseEntry) -> CoreResult<()> {
        self.with_records(|r| r.expenses.push(entry.clone()));
        Ok(())
    }

    fn delete_expense(&self, id: Uuid) -> CoreResult<()> {
        self.with_records(|r| {
            if remove_by_id(&mut r.expenses, id) {
                Ok(())
            } else {
                Err(CoreError::NotFound(format!("expense {id}")))
            }
        })
    }

    fn clear_reports(&self) -> CoreResult<()> {
        self.with_records(|r| {
            r.entries.clear();
            r.expenses.clear();
        });
        Ok(())
    }
}

/// Removes the record carrying `id`; reports whether anything was removed.
pub(crate) fn remove_by_id<T: Identifiable>(items: &mut Vec<T>, id: Uuid) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}
