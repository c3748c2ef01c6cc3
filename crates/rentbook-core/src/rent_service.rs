//! Per-room rent ledger operations.

use rentbook_domain::{LedgerEntry, RoomRegistry};
use uuid::Uuid;

use crate::{forms::LedgerEntryForm, store::RecordStore, CoreError, CoreResult};

/// Chooses which entry fixes a room's rent advance.
///
/// `Chronological` uses true creation order: the room's first-ever entry
/// governs. `DisplayOrder` derives the baseline from the newest-first
/// display list instead, so the most recent entry governs; kept for
/// compatibility with ledgers recorded under that rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaselineRule {
    #[default]
    Chronological,
    DisplayOrder,
}

/// Request-scoped snapshot of one room's history, refreshed after every
/// mutation.
#[derive(Debug, Clone)]
pub struct RoomView {
    pub room: u32,
    /// Most-recently-created first, for display.
    pub entries: Vec<LedgerEntry>,
    /// The advance all entries for this room must carry, per `rule`.
    pub baseline_advance: Option<f64>,
}

/// Operations over the per-room payment history.
pub struct RentLedgerService;

impl RentLedgerService {
    /// Fetches a room's entries, newest first. A room with no history
    /// yields an empty view, not an error.
    pub fn room_view(
        store: &dyn RecordStore,
        room: u32,
        rule: BaselineRule,
    ) -> CoreResult<RoomView> {
        let mut entries: Vec<LedgerEntry> = store
            .ledger_entries()?
            .into_iter()
            .filter(|entry| entry.room_number == room)
            .collect();
        entries.reverse();
        let baseline_advance = baseline_of(&entries, rule);
        Ok(RoomView {
            room,
            entries,
            baseline_advance,
        })
    }

    /// The rent advance fixed by the room's baseline entry, if any.
    pub fn baseline_advance(
        store: &dyn RecordStore,
        room: u32,
        rule: BaselineRule,
    ) -> CoreResult<Option<f64>> {
        Ok(Self::room_view(store, room, rule)?.baseline_advance)
    }

    /// Creates a new entry. The first entry for a room fixes its baseline
    /// advance; later submissions must carry the same value.
    pub fn submit(
        store: &dyn RecordStore,
        form: LedgerEntryForm,
        rule: BaselineRule,
    ) -> CoreResult<RoomView> {
        if !RoomRegistry::contains(form.room_number) {
            return Err(CoreError::Validation(format!(
                "room {} is not a registered flat",
                form.room_number
            )));
        }
        let entry = form.into_entry(Uuid::new_v4())?;
        let view = Self::room_view(store, entry.room_number, rule)?;
        if let Some(baseline) = view.baseline_advance {
            if entry.rent_advance != baseline {
                return Err(CoreError::Validation(format!(
                    "rent advance for room {} is fixed at {} by its first entry",
                    entry.room_number, baseline
                )));
            }
        }
        store.put_ledger_entry(&entry)?;
        tracing::info!(room = entry.room_number, id = %entry.id, "ledger entry created");
        Self::room_view(store, entry.room_number, rule)
    }

    /// Replaces the entry with `id`. Room number and rent advance are not
    /// editable; attempts to change them are coerced back to the stored
    /// values.
    pub fn upsert(
        store: &dyn RecordStore,
        id: Uuid,
        form: LedgerEntryForm,
        rule: BaselineRule,
    ) -> CoreResult<RoomView> {
        let existing = store
            .ledger_entries()?
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("ledger entry {id}")))?;
        let mut entry = form.into_entry(id)?;
        entry.room_number = existing.room_number;
        entry.rent_advance = existing.rent_advance;
        store.put_ledger_entry(&entry)?;
        tracing::info!(room = entry.room_number, id = %id, "ledger entry updated");
        Self::room_view(store, entry.room_number, rule)
    }

    /// Removes every entry for the room. `NotFound` when it has none.
    pub fn delete_room(store: &dyn RecordStore, room: u32) -> CoreResult<usize> {
        let removed = store.delete_room(room)?;
        tracing::info!(room, removed, "room history deleted");
        Ok(removed)
    }
}

fn baseline_of(display_entries: &[LedgerEntry], rule: BaselineRule) -> Option<f64> {
    match rule {
        BaselineRule::Chronological => display_entries.last(),
        BaselineRule::DisplayOrder => display_entries.first(),
    }
    .map(|entry| entry.rent_advance)
}
