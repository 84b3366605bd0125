//! Qubit state vectors with in-place gates and measurement
//!
//! This crate provides the two state representations used by the superdense
//! coding simulator:
//!
//! - [`SingleQubitState`]: a 2-amplitude vector with NOT, Z and Hadamard
//! - [`TwoQubitState`]: a 4-amplitude vector with NOT, Z and Hadamard on the
//!   first qubit plus CNOT, and a joint measurement
//!
//! Gates mutate the state and return `&mut Self` so they can be chained.
//! Measurement never owns randomness: the caller passes a sampler closure,
//! which lets tests inject fixed samples.
//!
//! # Example
//!
//! ```
//! use densecode_state::TwoQubitState;
//! use densecode_core::BitPair;
//!
//! let bits: BitPair = "11".parse().unwrap();
//!
//! let mut pair = TwoQubitState::default();
//! pair.apply_hadamard()?.apply_cnot();
//! pair.apply_encoding(bits);
//! pair.apply_cnot().apply_hadamard()?;
//!
//! assert_eq!(pair.measure(&mut || 0.5), bits);
//! # Ok::<(), densecode_state::StateError>(())
//! ```

pub mod error;
pub mod measurement;
pub mod single_qubit;
pub mod two_qubit;
pub mod validation;

pub use error::{Result, StateError};
pub use measurement::{MeasurementResult, SamplingMode};
pub use single_qubit::SingleQubitState;
pub use two_qubit::TwoQubitState;
