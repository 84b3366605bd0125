//! Core types shared across the densecode crates
//!
//! This crate provides the building blocks that sit outside the state vectors:
//! - [`Bit`] and [`BitPair`]: Type-safe classical bits carried by the protocol
//! - [`AmplitudeFormat`]: The display policy for complex amplitudes
//! - [`QuantumError`]: Errors raised when parsing classical input
//!
//! # Example
//! ```
//! use densecode_core::{Bit, BitPair};
//!
//! let bits: BitPair = "10".parse().unwrap();
//! assert_eq!(bits.first, Bit::One);
//! assert_eq!(bits.index(), 2);
//! ```

pub mod bits;
pub mod error;
pub mod format;

// Re-exports for convenience
pub use bits::{Bit, BitPair};
pub use error::QuantumError;
pub use format::AmplitudeFormat;
pub use num_complex::Complex64;

/// Type alias for results in densecode-core
pub type Result<T> = std::result::Result<T, QuantumError>;
