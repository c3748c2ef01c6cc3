//! rentbook-domain
//!
//! Pure domain models for the rent/expense ledger (entries, expenses,
//! rooms, report windows). No I/O, no CLI, no storage.

pub mod common;
pub mod dates;
pub mod entry;
pub mod expense;
pub mod report;
pub mod rooms;

pub use common::*;
pub use entry::*;
pub use expense::*;
pub use report::*;
pub use rooms::*;
