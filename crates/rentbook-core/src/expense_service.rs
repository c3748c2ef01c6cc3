//! Cash outflow ledger operations.

use rentbook_domain::ExpenseEntry;
use uuid::Uuid;

use crate::{forms::ExpenseForm, store::RecordStore, CoreError, CoreResult};

/// Result of a batch submission. Items are persisted independently and
/// serially; a failure never rolls back earlier successes.
#[derive(Debug, Default)]
pub struct ExpenseBatchOutcome {
    pub created: Vec<ExpenseEntry>,
    /// Failed rows as `(row index, error)`.
    pub failures: Vec<(usize, CoreError)>,
}

impl ExpenseBatchOutcome {
    pub fn fully_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Operations over the flat expense collection.
pub struct ExpenseService;

impl ExpenseService {
    pub fn list(store: &dyn RecordStore) -> CoreResult<Vec<ExpenseEntry>> {
        store.expenses()
    }

    /// Persists a batch of expense rows one by one, reporting per-row
    /// outcomes. At least one row must carry a non-empty amount before any
    /// request is issued; rows that are entirely blank are skipped.
    pub fn submit_batch(
        store: &dyn RecordStore,
        forms: Vec<ExpenseForm>,
    ) -> CoreResult<ExpenseBatchOutcome> {
        if !forms.iter().any(|form| !form.amount.trim().is_empty()) {
            return Err(CoreError::Validation(
                "at least one expense with an amount is required".into(),
            ));
        }
        let mut outcome = ExpenseBatchOutcome::default();
        for (index, form) in forms.into_iter().enumerate() {
            if form.is_blank() {
                continue;
            }
            match form.into_entry(Uuid::new_v4()) {
                Ok(entry) => match store.create_expense(&entry) {
                    Ok(()) => {
                        tracing::info!(id = %entry.id, amount = entry.amount, "expense created");
                        outcome.created.push(entry);
                    }
                    Err(err) => {
                        tracing::warn!(row = index, error = %err, "expense row failed");
                        outcome.failures.push((index, err));
                    }
                },
                Err(err) => outcome.failures.push((index, err)),
            }
        }
        Ok(outcome)
    }

    /// Deletes one expense; fails visibly when the id is unknown.
    pub fn delete(store: &dyn RecordStore, id: Uuid) -> CoreResult<()> {
        store.delete_expense(id)?;
        tracing::info!(id = %id, "expense deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        memory::MemoryStore,
        test_support::{expense_form, FlakyStore},
    };

    #[test]
    fn batch_requires_one_amount() {
        let store = MemoryStore::new();
        let forms = vec![
            expense_form("Mohan", "", "05-03-2025"),
            expense_form("", "", ""),
        ];
        let err = ExpenseService::submit_batch(&store, forms).expect_err("gate must hold");
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(ExpenseService::list(&store).unwrap().is_empty());
    }

    #[test]
    fn batch_persists_rows_and_skips_blanks() {
        let store = MemoryStore::new();
        let forms = vec![
            expense_form("Mohan", "450", "05-03-2025"),
            ExpenseForm::default(),
            expense_form("Kiran", "1200", "06-03-2025"),
        ];
        let outcome = ExpenseService::submit_batch(&store, forms).expect("batch submits");
        assert!(outcome.fully_succeeded());
        assert_eq!(outcome.created.len(), 2);
        assert_eq!(ExpenseService::list(&store).unwrap().len(), 2);
    }

    #[test]
    fn later_failure_keeps_earlier_successes() {
        let store = FlakyStore {
            fail_expense_creates_from: Some(1),
            ..FlakyStore::default()
        };
        let forms = vec![
            expense_form("Mohan", "450", "05-03-2025"),
            expense_form("Kiran", "1200", "06-03-2025"),
        ];
        let outcome = ExpenseService::submit_batch(&store, forms).expect("batch returns outcome");
        assert_eq!(outcome.created.len(), 1);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].0, 1);
        assert!(matches!(outcome.failures[0].1, CoreError::Transport(_)));

        let listed = ExpenseService::list(&store).expect("list after partial failure");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].person, "Mohan");
    }

    #[test]
    fn invalid_row_is_a_per_row_failure() {
        let store = MemoryStore::new();
        let forms = vec![
            expense_form("Mohan", "450", "05-03-2025"),
            expense_form("Kiran", "twelve", "06-03-2025"),
        ];
        let outcome = ExpenseService::submit_batch(&store, forms).expect("batch submits");
        assert_eq!(outcome.created.len(), 1);
        assert!(matches!(outcome.failures[0].1, CoreError::Validation(_)));
    }

    #[test]
    fn delete_of_unknown_id_fails_visibly() {
        let store = MemoryStore::new();
        assert!(matches!(
            ExpenseService::delete(&store, Uuid::new_v4()),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn delete_removes_only_the_target() {
        let store = MemoryStore::new();
        let outcome = ExpenseService::submit_batch(
            &store,
            vec![
                expense_form("Mohan", "450", "05-03-2025"),
                expense_form("Kiran", "1200", "06-03-2025"),
            ],
        )
        .unwrap();
        let target = outcome.created[0].id;
        ExpenseService::delete(&store, target).expect("delete succeeds");
        let remaining = ExpenseService::list(&store).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].person, "Kiran");
    }
}
