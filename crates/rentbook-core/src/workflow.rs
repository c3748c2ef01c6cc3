//! Confirmation state machine for destructive operations.
//!
//! Shared by single-expense deletion and whole-room deletion: a target is
//! searched for, shown to the operator, and deleted only after an explicit
//! confirmation. Cancelling discards the pending target with no side
//! effect.

use std::mem;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionState<T> {
    Idle,
    Searching,
    Found(T),
    NotFound,
    ConfirmPending(T),
    Deleted,
}

#[derive(Debug)]
pub struct DeletionWorkflow<T> {
    state: DeletionState<T>,
}

impl<T> Default for DeletionWorkflow<T> {
    fn default() -> Self {
        Self {
            state: DeletionState::Idle,
        }
    }
}

impl<T> DeletionWorkflow<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeletionState<T> {
        &self.state
    }

    /// Starts a new search. Allowed from any resting state; refused while
    /// a search or confirmation is still in progress.
    pub fn begin_search(&mut self) -> CoreResult<()> {
        match self.state {
            DeletionState::Idle | DeletionState::NotFound | DeletionState::Deleted => {
                self.state = DeletionState::Searching;
                Ok(())
            }
            _ => Err(CoreError::Validation(
                "a deletion is already in progress".into(),
            )),
        }
    }

    /// Records the search outcome.
    pub fn resolve_search(&mut self, target: Option<T>) -> CoreResult<()> {
        if !matches!(self.state, DeletionState::Searching) {
            return Err(CoreError::Validation("no search in progress".into()));
        }
        self.state = match target {
            Some(target) => DeletionState::Found(target),
            None => DeletionState::NotFound,
        };
        Ok(())
    }

    /// Moves a found target to the explicit confirmation step.
    pub fn request_confirmation(&mut self) -> CoreResult<&T> {
        match mem::replace(&mut self.state, DeletionState::Idle) {
            DeletionState::Found(target) => {
                self.state = DeletionState::ConfirmPending(target);
                match &self.state {
                    DeletionState::ConfirmPending(target) => Ok(target),
                    _ => unreachable!(),
                }
            }
            other => {
                self.state = other;
                Err(CoreError::Validation("nothing found to delete".into()))
            }
        }
    }

    /// Issues exactly one delete request for the pending target. On
    /// failure the error is surfaced and the workflow returns to idle;
    /// retrying means re-running the whole flow.
    pub fn confirm<F>(&mut self, delete: F) -> CoreResult<()>
    where
        F: FnOnce(&T) -> CoreResult<()>,
    {
        match mem::replace(&mut self.state, DeletionState::Idle) {
            DeletionState::ConfirmPending(target) => match delete(&target) {
                Ok(()) => {
                    self.state = DeletionState::Deleted;
                    Ok(())
                }
                Err(err) => Err(err),
            },
            other => {
                self.state = other;
                Err(CoreError::Validation(
                    "no deletion pending confirmation".into(),
                ))
            }
        }
    }

    /// Discards any pending target with no side effect.
    pub fn cancel(&mut self) {
        self.state = DeletionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn happy_path_reaches_deleted_with_one_request() {
        let mut flow = DeletionWorkflow::new();
        flow.begin_search().unwrap();
        flow.resolve_search(Some(7u32)).unwrap();
        assert_eq!(*flow.request_confirmation().unwrap(), 7);

        let mut calls = 0;
        flow.confirm(|target| {
            calls += 1;
            assert_eq!(*target, 7);
            Ok(())
        })
        .expect("confirm succeeds");
        assert_eq!(calls, 1);
        assert!(matches!(flow.state(), DeletionState::Deleted));
    }

    #[test]
    fn cancel_discards_without_side_effect() {
        let mut flow = DeletionWorkflow::new();
        flow.begin_search().unwrap();
        flow.resolve_search(Some(Uuid::new_v4())).unwrap();
        flow.request_confirmation().unwrap();
        flow.cancel();
        assert!(matches!(flow.state(), DeletionState::Idle));

        let err = flow
            .confirm(|_| panic!("delete must not be called"))
            .expect_err("nothing pending");
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn not_found_skips_confirmation() {
        let mut flow: DeletionWorkflow<u32> = DeletionWorkflow::new();
        flow.begin_search().unwrap();
        flow.resolve_search(None).unwrap();
        assert!(matches!(flow.state(), DeletionState::NotFound));
        assert!(flow.request_confirmation().is_err());
        // A fresh search may start from NotFound.
        flow.begin_search().unwrap();
    }

    #[test]
    fn failed_delete_surfaces_and_resets() {
        let mut flow = DeletionWorkflow::new();
        flow.begin_search().unwrap();
        flow.resolve_search(Some(1u32)).unwrap();
        flow.request_confirmation().unwrap();
        let err = flow
            .confirm(|_| Err(CoreError::Transport("store unreachable".into())))
            .expect_err("delete failed");
        assert!(matches!(err, CoreError::Transport(_)));
        assert!(matches!(flow.state(), DeletionState::Idle));
    }

    #[test]
    fn confirmation_requires_explicit_step() {
        let mut flow = DeletionWorkflow::new();
        flow.begin_search().unwrap();
        flow.resolve_search(Some(1u32)).unwrap();
        // Skipping request_confirmation: confirm must refuse.
        let err = flow
            .confirm(|_| panic!("delete must not be called"))
            .expect_err("not pending");
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
