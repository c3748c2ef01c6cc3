//! Shared traits for ledger records.

use uuid::Uuid;

/// Exposes a stable identifier for records held by the store.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}
