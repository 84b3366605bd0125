//! Error types for state vector operations

use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Normalization was requested for the zero vector
    #[error("Cannot normalize a zero-norm state vector")]
    ZeroNorm,

    /// An amplitude is NaN or infinite
    #[error("State vector contains a non-finite amplitude at index {index}")]
    NonFinite { index: usize },
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
