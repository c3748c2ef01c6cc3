//! Rentbook ties the rent/expense ledger services to a terminal front end
//! for day-to-day collection, expense, and reporting work.

pub mod cli;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Rentbook tracing initialized.");
    });
}
