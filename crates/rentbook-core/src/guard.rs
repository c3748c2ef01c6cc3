//! Per-operation in-flight tracking.
//!
//! Store round trips have no cancellation and no request-level locking, so
//! rapid repeated triggers could issue duplicate requests. Each triggering
//! surface holds a guard and refuses to start while a token is live.

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct InFlightGuard {
    busy: AtomicBool,
}

impl InFlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the operation. Returns `None` while a previous round trip is
    /// still outstanding.
    pub fn try_begin(&self) -> Option<InFlightToken<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightToken { guard: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases the guard when dropped.
#[derive(Debug)]
pub struct InFlightToken<'a> {
    guard: &'a InFlightGuard,
}

impl Drop for InFlightToken<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}
