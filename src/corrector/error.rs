//! Corrector error types

use thiserror::Error;

/// Rejected input. Returned as a value so batch callers can keep going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Missing, non-string or blank name
    #[error("Invalid name provided")]
    InvalidInput,
}
