//! rentbook-config
//!
//! Persistent operator preferences: report branding, currency symbol,
//! and the data root the record store lives under.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
