//! Shared fixtures for the service test modules.

use std::sync::atomic::{AtomicUsize, Ordering};

use rentbook_domain::{ExpenseEntry, LedgerEntry, PaymentMode, PaymentStatus, ReportWindow};
use uuid::Uuid;

use crate::{
    forms::{ExpenseForm, LedgerEntryForm},
    memory::MemoryStore,
    store::RecordStore,
    CoreError, CoreResult,
};

pub(crate) fn ledger_form(room: u32, advance: &str, date: &str) -> LedgerEntryForm {
    LedgerEntryForm {
        room_number: room,
        name: "Ravi".into(),
        mobile_number: "9876543210".into(),
        rent_advance: advance.into(),
        rent_month: "8000".into(),
        rent_paid: "8000".into(),
        maintenance: "500".into(),
        electricity_bill: "1200".into(),
        parking_bill: "300".into(),
        date: date.into(),
        payment_status: PaymentStatus::Paid,
        payment_mode: PaymentMode::Cash,
    }
}

pub(crate) fn expense_form(person: &str, amount: &str, date: &str) -> ExpenseForm {
    ExpenseForm {
        person: person.into(),
        purpose: "repairs".into(),
        date: date.into(),
        amount: amount.into(),
    }
}

/// Store wrapper that fails selected operations, for exercising transport
/// failure paths.
#[derive(Default)]
pub(crate) struct FlakyStore {
    pub inner: MemoryStore,
    /// Fail `create_expense` calls from this zero-based call index on.
    pub fail_expense_creates_from: Option<usize>,
    pub fail_ledger_reads: bool,
    pub fail_expense_reads: bool,
    pub expense_creates: AtomicUsize,
}

impl FlakyStore {
    fn transport() -> CoreError {
        CoreError::Transport("store unreachable".into())
    }
}

impl RecordStore for FlakyStore {
    fn ledger_entries(&self) -> CoreResult<Vec<LedgerEntry>> {
        if self.fail_ledger_reads {
            return Err(Self::transport());
        }
        self.inner.ledger_entries()
    }

    fn ledger_entries_in(&self, window: ReportWindow) -> CoreResult<Vec<LedgerEntry>> {
        if self.fail_ledger_reads {
            return Err(Self::transport());
        }
        self.inner.ledger_entries_in(window)
    }

    fn put_ledger_entry(&self, entry: &LedgerEntry) -> CoreResult<()> {
        self.inner.put_ledger_entry(entry)
    }

    fn delete_ledger_entry(&self, id: Uuid) -> CoreResult<()> {
        self.inner.delete_ledger_entry(id)
    }

    fn delete_room(&self, room: u32) -> CoreResult<usize> {
        self.inner.delete_room(room)
    }

    fn expenses(&self) -> CoreResult<Vec<ExpenseEntry>> {
        if self.fail_expense_reads {
            return Err(Self::transport());
        }
        self.inner.expenses()
    }

    fn expenses_in(&self, window: ReportWindow) -> CoreResult<Vec<ExpenseEntry>> {
        if self.fail_expense_reads {
            return Err(Self::transport());
        }
        self.inner.expenses_in(window)
    }

    fn create_expense(&self, entry: &ExpenseEntry) -> CoreResult<()> {
        let call = self.expense_creates.fetch_add(1, Ordering::SeqCst);
        if matches!(self.fail_expense_creates_from, Some(from) if call >= from) {
            return Err(Self::transport());
        }
        self.inner.create_expense(entry)
    }

    fn delete_expense(&self, id: Uuid) -> CoreResult<()> {
        self.inner.delete_expense(id)
    }

    fn clear_reports(&self) -> CoreResult<()> {
        self.inner.clear_reports()
    }
}
