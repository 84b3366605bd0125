//! Error types for densecode-core

use thiserror::Error;

/// Errors that can occur while handling classical protocol input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuantumError {
    /// Input was not a single classical bit
    #[error("Invalid classical bit '{0}': expected 0 or 1")]
    InvalidBit(String),

    /// Input was not a pair of classical bits
    #[error("Invalid bit pair '{0}': expected two digits, each 0 or 1")]
    InvalidBitPair(String),

    /// Basis index outside the two-qubit computational basis
    #[error("Basis index {0} out of range for a two-qubit state")]
    InvalidBasisIndex(usize),
}

impl QuantumError {
    /// Create an invalid bit error
    pub fn invalid_bit(input: impl Into<String>) -> Self {
        Self::InvalidBit(input.into())
    }

    /// Create an invalid bit pair error
    pub fn invalid_bit_pair(input: impl Into<String>) -> Self {
        Self::InvalidBitPair(input.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bit_error() {
        let err = QuantumError::invalid_bit("7");
        let msg = format!("{}", err);
        assert!(msg.contains("'7'"));
        assert!(msg.contains("0 or 1"));
    }

    #[test]
    fn test_invalid_bit_pair_error() {
        let err = QuantumError::invalid_bit_pair("012");
        assert!(err.to_string().contains("012"));
    }

    #[test]
    fn test_invalid_basis_index_error() {
        let err = QuantumError::InvalidBasisIndex(4);
        assert!(err.to_string().contains('4'));
    }
}
