//! Monthly report aggregation.

use rentbook_domain::{Amounted, ExpenseEntry, LedgerEntry, ReportWindow};
use serde::Serialize;

use crate::{store::RecordStore, CoreResult};

/// Aggregated report data for one resolved window.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSnapshot {
    pub window: ReportWindow,
    pub inflows: Vec<LedgerEntry>,
    pub outflows: Vec<ExpenseEntry>,
    pub total_income: f64,
    pub total_outcome: f64,
    pub remaining_balance: f64,
}

impl ReportSnapshot {
    fn aggregate(
        window: ReportWindow,
        inflows: Vec<LedgerEntry>,
        outflows: Vec<ExpenseEntry>,
    ) -> Self {
        let total_income: f64 = inflows.iter().map(Amounted::amount).sum();
        let total_outcome: f64 = outflows.iter().map(Amounted::amount).sum();
        Self {
            window,
            inflows,
            outflows,
            total_income,
            total_outcome,
            remaining_balance: total_income - total_outcome,
        }
    }

    fn cleared(window: ReportWindow) -> Self {
        Self::aggregate(window, Vec::new(), Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.inflows.is_empty() && self.outflows.is_empty()
    }
}

/// Fetches and holds the current report. A failed fetch leaves the prior
/// snapshot untouched; only a complete fetch overwrites it.
#[derive(Debug, Default)]
pub struct ReportService {
    snapshot: Option<ReportSnapshot>,
}

impl ReportService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&ReportSnapshot> {
        self.snapshot.as_ref()
    }

    /// Aggregates the window for the zero-based `month0` of `year`.
    pub fn fetch(
        &mut self,
        store: &dyn RecordStore,
        year: i32,
        month0: u32,
    ) -> CoreResult<&ReportSnapshot> {
        let window = ReportWindow::for_month(year, month0)?;
        let inflows = store.ledger_entries_in(window)?;
        let outflows = store.expenses_in(window)?;
        tracing::debug!(
            month = window.month_name(),
            inflows = inflows.len(),
            outflows = outflows.len(),
            "report aggregated"
        );
        Ok(&*self
            .snapshot
            .insert(ReportSnapshot::aggregate(window, inflows, outflows)))
    }

    /// Clears all report data on the store, then zeroes the local
    /// aggregates regardless of the store's granularity.
    pub fn clear(&mut self, store: &dyn RecordStore) -> CoreResult<()> {
        store.clear_reports()?;
        tracing::info!("all report data cleared");
        if let Some(prior) = self.snapshot.take() {
            self.snapshot = Some(ReportSnapshot::cleared(prior.window));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        memory::MemoryStore,
        rent_service::{BaselineRule, RentLedgerService},
        test_support::{expense_form, ledger_form, FlakyStore},
        ExpenseService,
    };

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        // Inside the March window (02-03 .. 01-04).
        RentLedgerService::submit(
            &store,
            ledger_form(101, "5000", "10-03-2025"),
            BaselineRule::Chronological,
        )
        .unwrap();
        RentLedgerService::submit(
            &store,
            ledger_form(102, "3000", "01-04-2025"),
            BaselineRule::Chronological,
        )
        .unwrap();
        // On the first of March: outside the window.
        RentLedgerService::submit(
            &store,
            ledger_form(103, "2000", "01-03-2025"),
            BaselineRule::Chronological,
        )
        .unwrap();
        ExpenseService::submit_batch(
            &store,
            vec![
                expense_form("Mohan", "450", "05-03-2025"),
                expense_form("Kiran", "1200", "20-04-2025"),
            ],
        )
        .unwrap();
        store
    }

    #[test]
    fn aggregate_sums_only_windowed_records() {
        let store = seeded_store();
        let mut service = ReportService::new();
        let snapshot = service.fetch(&store, 2025, 2).expect("fetch March");

        // Each seeded entry pays 8000 + 300 + 1200 + 500 = 10000.
        assert_eq!(snapshot.inflows.len(), 2);
        assert_eq!(snapshot.total_income, 20000.0);
        assert_eq!(snapshot.outflows.len(), 1);
        assert_eq!(snapshot.total_outcome, 450.0);
        assert_eq!(snapshot.remaining_balance, 19550.0);
    }

    #[test]
    fn failed_fetch_preserves_prior_snapshot() {
        let flaky = FlakyStore::default();
        RentLedgerService::submit(
            &flaky,
            ledger_form(101, "5000", "10-03-2025"),
            BaselineRule::Chronological,
        )
        .unwrap();

        let mut service = ReportService::new();
        service.fetch(&flaky, 2025, 2).expect("first fetch");
        let income_before = service.snapshot().unwrap().total_income;

        let flaky = FlakyStore {
            fail_expense_reads: true,
            ..FlakyStore::default()
        };
        service.fetch(&flaky, 2025, 2).expect_err("fetch must fail");
        let snapshot = service.snapshot().expect("prior snapshot kept");
        assert_eq!(snapshot.total_income, income_before);
        assert_eq!(snapshot.inflows.len(), 1);
    }

    #[test]
    fn clear_zeroes_aggregates_after_store_confirms() {
        let store = seeded_store();
        let mut service = ReportService::new();
        service.fetch(&store, 2025, 2).unwrap();
        assert!(service.snapshot().unwrap().total_income > 0.0);

        service.clear(&store).expect("clear succeeds");
        let snapshot = service.snapshot().expect("zeroed snapshot kept");
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.total_income, 0.0);
        assert_eq!(snapshot.total_outcome, 0.0);
        assert_eq!(snapshot.remaining_balance, 0.0);
        assert!(store.ledger_entries().unwrap().is_empty());
        assert!(store.expenses().unwrap().is_empty());
    }

    #[test]
    fn month_out_of_range_is_validation() {
        let store = MemoryStore::new();
        let mut service = ReportService::new();
        assert!(matches!(
            service.fetch(&store, 2025, 12),
            Err(crate::CoreError::Validation(_))
        ));
    }
}
