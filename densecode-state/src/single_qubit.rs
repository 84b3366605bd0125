//! Single-qubit state vector
//!
//! Holds the amplitudes of |0> and |1> and applies the NOT, Z and Hadamard
//! gates in place.

use crate::error::Result;
use crate::measurement::MeasurementResult;
use crate::validation;
use densecode_core::{AmplitudeFormat, Bit};
use num_complex::Complex64;
use std::fmt;
use tracing::trace;

/// A single qubit `amp0 |0> + amp1 |1>`
///
/// Gates mutate the state and return `&mut Self` so they chain. Hadamard and
/// normalization can fail on the zero vector and therefore return `Result`.
///
/// # Example
///
/// ```
/// use densecode_state::SingleQubitState;
///
/// let mut qubit = SingleQubitState::default();
/// qubit.apply_not().apply_z();
/// assert_eq!(qubit.amp1().re, -1.0);
///
/// qubit.apply_hadamard().unwrap();
/// assert!(qubit.is_normalized(1e-12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleQubitState {
    amplitudes: [Complex64; 2],
}

impl Default for SingleQubitState {
    /// The |0> state
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl SingleQubitState {
    /// Create a state from two amplitudes
    ///
    /// No normalization is performed: supply a unit vector or call
    /// [`normalize`](Self::normalize).
    pub fn new(amp0: impl Into<Complex64>, amp1: impl Into<Complex64>) -> Self {
        Self {
            amplitudes: [amp0.into(), amp1.into()],
        }
    }

    /// Create a state from an amplitude array, without normalization
    pub fn from_amplitudes(amplitudes: [Complex64; 2]) -> Self {
        Self { amplitudes }
    }

    /// Create a state and scale it to unit length
    ///
    /// # Errors
    /// Returns `StateError::ZeroNorm` when both amplitudes are zero
    pub fn normalized(amp0: impl Into<Complex64>, amp1: impl Into<Complex64>) -> Result<Self> {
        let mut state = Self::new(amp0, amp1);
        state.normalize()?;
        Ok(state)
    }

    /// Amplitude of |0>
    #[inline]
    pub fn amp0(&self) -> Complex64 {
        self.amplitudes[0]
    }

    /// Amplitude of |1>
    #[inline]
    pub fn amp1(&self) -> Complex64 {
        self.amplitudes[1]
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Complex64; 2] {
        &self.amplitudes
    }

    /// Measurement probabilities `[|amp0|^2, |amp1|^2]`
    pub fn probabilities(&self) -> [f64; 2] {
        validation::probabilities(&self.amplitudes)
    }

    pub fn norm(&self) -> f64 {
        validation::norm(&self.amplitudes)
    }

    /// Check if |norm - 1| < epsilon
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        validation::is_normalized(&self.amplitudes, epsilon)
    }

    /// Whether the state sits on a single basis state
    pub fn is_collapsed(&self) -> bool {
        self.basis_state().is_some()
    }

    /// The outcome a collapsed state yields with certainty
    pub fn basis_state(&self) -> Option<Bit> {
        validation::one_hot_index(&self.amplitudes).map(|idx| Bit::from(idx == 1))
    }

    /// NOT (Pauli-X): swap the amplitudes of |0> and |1>
    pub fn apply_not(&mut self) -> &mut Self {
        self.amplitudes.swap(0, 1);
        self
    }

    /// Z: negate the amplitude of |1>
    pub fn apply_z(&mut self) -> &mut Self {
        self.amplitudes[1] = -self.amplitudes[1];
        self
    }

    /// Hadamard: `(amp0 + amp1, amp0 - amp1)` followed by normalization
    ///
    /// # Errors
    /// Returns `StateError::ZeroNorm` if the state was the zero vector
    pub fn apply_hadamard(&mut self) -> Result<&mut Self> {
        let [a, b] = self.amplitudes;
        self.amplitudes = [a + b, a - b];
        self.normalize()
    }

    /// Divide both amplitudes by the state's norm
    ///
    /// # Errors
    /// Returns `StateError::ZeroNorm` for the zero vector, leaving it untouched
    pub fn normalize(&mut self) -> Result<&mut Self> {
        validation::normalize_in_place(&mut self.amplitudes)?;
        Ok(self)
    }

    /// Measure in the computational basis, collapsing the state
    ///
    /// Draws exactly one sample from `rng`, which must return values in
    /// [0, 1). Outcome 0 is chosen when the sample is below `|amp0|^2`.
    pub fn measure(&mut self, rng: &mut dyn FnMut() -> f64) -> Bit {
        self.measure_detailed(rng).outcome
    }

    /// Measure and report the outcome's prior probability and the sample used
    pub fn measure_detailed(&mut self, rng: &mut dyn FnMut() -> f64) -> MeasurementResult<Bit> {
        let probabilities = self.probabilities();
        let sample = rng();
        let index = if sample < probabilities[0] { 0 } else { 1 };

        validation::collapse_to(&mut self.amplitudes, index);
        let outcome = Bit::from(index == 1);
        trace!(%outcome, sample, probability = probabilities[index], "qubit measured");

        MeasurementResult {
            outcome,
            probability: probabilities[index],
            sample,
        }
    }

    /// Render both terms as `"<a> |0> + <b> |1>"` under the given policy
    pub fn display_with(&self, format: &AmplitudeFormat) -> String {
        format!(
            "{} |0> + {} |1>",
            format.value(self.amplitudes[0]),
            format.value(self.amplitudes[1])
        )
    }
}

impl fmt::Display for SingleQubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(&AmplitudeFormat::default()))
    }
}
