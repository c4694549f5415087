//! Core error types for the WealthPulse engine.
//!
//! Only entity validation can fail. Every other engine operation is a total
//! function over the current ledger and history; zero denominators and
//! negative net worth are expressed through explicit result values instead.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A single entry of an import bundle was rejected; nothing was applied.
    #[error("Import rejected {kind} #{index}: {source}")]
    Import {
        kind: &'static str,
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Failed to (de)serialize engine data: {0}")]
    Serialization(String),
}

/// Validation errors raised when an entity is added to the ledger.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("Field '{field}' must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// A value outside the range the engine can aggregate.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns the underlying validation error, if this is one.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) | Error::Import { source: err, .. } => Some(err),
            Error::Serialization(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
