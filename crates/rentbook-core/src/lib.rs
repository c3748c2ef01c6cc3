//! rentbook-core
//!
//! Business logic and services for the rent/expense ledger.
//! Depends on rentbook-domain. No CLI, no terminal I/O; all persistence
//! goes through the [`store::RecordStore`] contract.

pub mod error;
pub mod expense_service;
pub mod export_service;
pub mod format;
pub mod forms;
pub mod guard;
pub mod memory;
pub mod rent_service;
pub mod report_service;
pub mod store;
pub mod workflow;

pub use error::{CoreError, CoreResult};
pub use expense_service::*;
pub use export_service::*;
pub use forms::*;
pub use guard::*;
pub use memory::MemoryStore;
pub use rent_service::*;
pub use report_service::*;
pub use store::RecordStore;
pub use workflow::*;

#[cfg(test)]
pub(crate) mod test_support;
