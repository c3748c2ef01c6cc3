use thiserror::Error;

/// Unified error taxonomy for ledger and report operations.
///
/// `Validation` failures are caught before any store request is issued;
/// `Transport` and `NotFound` surface store outcomes without mutating any
/// prior local state.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Store request failed: {0}")]
    Transport(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

impl From<rentbook_domain::ReportWindowError> for CoreError {
    fn from(err: rentbook_domain::ReportWindowError) -> Self {
        CoreError::Validation(err.to_string())
    }
}
