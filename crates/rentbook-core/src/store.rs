//! Contract for the external record store.

use rentbook_domain::{ExpenseEntry, LedgerEntry, ReportWindow};
use uuid::Uuid;

use crate::CoreResult;

/// Abstraction over the durable owner of ledger and expense records.
///
/// The core holds only request-scoped views; every operation here is one
/// request/response round trip. Reads are safe to retry; writes and deletes
/// are not guaranteed idempotent and the core never retries them.
pub trait RecordStore: Send + Sync {
    /// Every ledger entry, in creation order.
    fn ledger_entries(&self) -> CoreResult<Vec<LedgerEntry>>;
    /// Ledger entries whose date falls inside `window`, in creation order.
    fn ledger_entries_in(&self, window: ReportWindow) -> CoreResult<Vec<LedgerEntry>>;
    /// Creates the entry, or replaces the stored entry with the same id.
    fn put_ledger_entry(&self, entry: &LedgerEntry) -> CoreResult<()>;
    fn delete_ledger_entry(&self, id: Uuid) -> CoreResult<()>;
    /// Cascading delete of a room's whole history; returns the number of
    /// entries removed. `NotFound` when the room has no entries.
    fn delete_room(&self, room: u32) -> CoreResult<usize>;

    /// Every expense entry, in creation order.
    fn expenses(&self) -> CoreResult<Vec<ExpenseEntry>>;
    fn expenses_in(&self, window: ReportWindow) -> CoreResult<Vec<ExpenseEntry>>;
    fn create_expense(&self, entry: &ExpenseEntry) -> CoreResult<()>;
    fn delete_expense(&self, id: Uuid) -> CoreResult<()>;

    /// Destroys all report data, ledger and expense alike. Irreversible.
    fn clear_reports(&self) -> CoreResult<()>;
}
