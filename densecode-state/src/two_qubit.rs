//! Two-qubit state vector over the basis {|00>, |01>, |10>, |11>}
//!
//! Basis labels are ordered (first qubit, second qubit), so the amplitude at
//! index `2 * first + second` belongs to `|first second>`. Every single-qubit
//! gate here acts on the first qubit; CNOT uses the first qubit as control.

use crate::error::Result;
use crate::measurement::{MeasurementResult, SamplingMode};
use crate::validation;
use densecode_core::{AmplitudeFormat, BitPair};
use num_complex::Complex64;
use std::fmt;
use tracing::trace;

const LABELS: [&str; 4] = ["00", "01", "10", "11"];

/// A two-qubit state `amp00 |00> + amp01 |01> + amp10 |10> + amp11 |11>`
///
/// Stored as an independent 4-vector; it never aliases a
/// [`SingleQubitState`](crate::SingleQubitState).
///
/// # Example
///
/// ```
/// use densecode_state::TwoQubitState;
/// use std::f64::consts::FRAC_1_SQRT_2;
///
/// // Bell state (|00> + |11>)/√2
/// let mut pair = TwoQubitState::default();
/// pair.apply_hadamard().unwrap().apply_cnot();
///
/// assert!((pair.amp00().re - FRAC_1_SQRT_2).abs() < 1e-12);
/// assert!((pair.amp11().re - FRAC_1_SQRT_2).abs() < 1e-12);
/// assert_eq!(pair.amp01().norm(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoQubitState {
    amplitudes: [Complex64; 4],
}

impl Default for TwoQubitState {
    /// The |00> state
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }
}

impl TwoQubitState {
    /// Create a state from the four basis amplitudes, without normalization
    pub fn new(
        amp00: impl Into<Complex64>,
        amp01: impl Into<Complex64>,
        amp10: impl Into<Complex64>,
        amp11: impl Into<Complex64>,
    ) -> Self {
        Self {
            amplitudes: [amp00.into(), amp01.into(), amp10.into(), amp11.into()],
        }
    }

    /// Create a state from an amplitude array in basis order, without normalization
    pub fn from_amplitudes(amplitudes: [Complex64; 4]) -> Self {
        Self { amplitudes }
    }

    /// Create a state and scale it to unit length
    ///
    /// # Errors
    /// Returns `StateError::ZeroNorm` when every amplitude is zero
    pub fn normalized(
        amp00: impl Into<Complex64>,
        amp01: impl Into<Complex64>,
        amp10: impl Into<Complex64>,
        amp11: impl Into<Complex64>,
    ) -> Result<Self> {
        let mut state = Self::new(amp00, amp01, amp10, amp11);
        state.normalize()?;
        Ok(state)
    }

    /// The computational basis state labelled by `bits`
    pub fn basis(bits: BitPair) -> Self {
        let mut amplitudes = [Complex64::new(0.0, 0.0); 4];
        amplitudes[bits.index()] = Complex64::new(1.0, 0.0);
        Self { amplitudes }
    }

    #[inline]
    pub fn amp00(&self) -> Complex64 {
        self.amplitudes[0]
    }

    #[inline]
    pub fn amp01(&self) -> Complex64 {
        self.amplitudes[1]
    }

    #[inline]
    pub fn amp10(&self) -> Complex64 {
        self.amplitudes[2]
    }

    #[inline]
    pub fn amp11(&self) -> Complex64 {
        self.amplitudes[3]
    }

    /// Amplitude of the basis state labelled by `bits`
    #[inline]
    pub fn amplitude(&self, bits: BitPair) -> Complex64 {
        self.amplitudes[bits.index()]
    }

    /// All four amplitudes in basis order
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64; 4] {
        &self.amplitudes
    }

    /// Outcome probabilities `[p00, p01, p10, p11]`
    pub fn probabilities(&self) -> [f64; 4] {
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
    pub fn basis_state(&self) -> Option<BitPair> {
        validation::one_hot_index(&self.amplitudes).and_then(|idx| BitPair::from_index(idx).ok())
    }

    /// Controlled-NOT, first qubit as control: swap amp10 and amp11
    pub fn apply_cnot(&mut self) -> &mut Self {
        self.amplitudes.swap(2, 3);
        self
    }

    /// Hadamard on the first qubit, followed by normalization
    ///
    /// Pairs the amplitudes by second-qubit value:
    /// `(a00 + a10, a01 + a11, a00 - a10, a01 - a11)`.
    ///
    /// # Errors
    /// Returns `StateError::ZeroNorm` if the state was the zero vector
    pub fn apply_hadamard(&mut self) -> Result<&mut Self> {
        let [a, b, c, d] = self.amplitudes;
        self.amplitudes = [a + c, b + d, a - c, b - d];
        self.normalize()
    }

    /// NOT on the first qubit: `(a00, a01, a10, a11) -> (a10, a11, a00, a01)`
    pub fn apply_not(&mut self) -> &mut Self {
        let [a, b, c, d] = self.amplitudes;
        self.amplitudes = [c, d, a, b];
        self
    }

    /// Z on the first qubit: negate amp10 and amp11
    pub fn apply_z(&mut self) -> &mut Self {
        self.amplitudes[2] = -self.amplitudes[2];
        self.amplitudes[3] = -self.amplitudes[3];
        self
    }

    /// Superdense encoding of `bits` on the first qubit
    ///
    /// 00 applies nothing, 01 applies NOT, 10 applies Z, 11 applies NOT then Z.
    pub fn apply_encoding(&mut self, bits: BitPair) -> &mut Self {
        if bits.second.is_one() {
            self.apply_not();
        }
        if bits.first.is_one() {
            self.apply_z();
        }
        self
    }

    /// Divide all four amplitudes by the state's norm
    ///
    /// # Errors
    /// Returns `StateError::ZeroNorm` for the zero vector, leaving it untouched
    pub fn normalize(&mut self) -> Result<&mut Self> {
        validation::normalize_in_place(&mut self.amplitudes)?;
        Ok(self)
    }

    /// Jointly measure both qubits with cumulative sampling
    ///
    /// Draws exactly one sample from `rng` (values in [0, 1)) and collapses
    /// the state to the observed basis vector.
    pub fn measure(&mut self, rng: &mut dyn FnMut() -> f64) -> BitPair {
        self.measure_with(SamplingMode::Cumulative, rng).outcome
    }

    /// Jointly measure both qubits using an explicit sampling rule
    pub fn measure_with(
        &mut self,
        mode: SamplingMode,
        rng: &mut dyn FnMut() -> f64,
    ) -> MeasurementResult<BitPair> {
        let probabilities = self.probabilities();
        let sample = rng();
        let index = mode.select(&probabilities, sample);

        validation::collapse_to(&mut self.amplitudes, index);
        let outcome = BitPair::ALL[index];
        trace!(%outcome, %mode, sample, probability = probabilities[index], "pair measured");

        MeasurementResult {
            outcome,
            probability: probabilities[index],
            sample,
        }
    }

    /// Render the non-zero terms joined by `" + "`, eliding a coefficient of 1
    ///
    /// A state with no non-zero term renders as `0`.
    pub fn display_with(&self, format: &AmplitudeFormat) -> String {
        let terms: Vec<String> = self
            .amplitudes
            .iter()
            .zip(LABELS.iter())
            .filter(|(amp, _)| !format.is_zero(**amp))
            .map(|(amp, label)| format.term(*amp, label))
            .collect();

        if terms.is_empty() {
            "0".to_string()
        } else {
            terms.join(" + ")
        }
    }
}

impl fmt::Display for TwoQubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(&AmplitudeFormat::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateError;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn assert_amplitudes(state: &TwoQubitState, expected: [f64; 4]) {
        for (amp, want) in state.amplitudes().iter().zip(expected.iter()) {
            assert_relative_eq!(amp.re, *want, epsilon = 1e-12);
            assert_relative_eq!(amp.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_default_is_00() {
        let state = TwoQubitState::default();
        assert_amplitudes(&state, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(state.basis_state(), Some(BitPair::ALL[0]));
    }

    #[test]
    fn test_cnot_swaps_second_half() {
        let mut state = TwoQubitState::new(0.1, 0.2, 0.3, 0.4);
        state.apply_cnot();
        assert_amplitudes(&state, [0.1, 0.2, 0.4, 0.3]);
    }

    #[test]
    fn test_not_flips_first_qubit() {
        let mut state = TwoQubitState::new(0.1, 0.2, 0.3, 0.4);
        state.apply_not();
        assert_amplitudes(&state, [0.3, 0.4, 0.1, 0.2]);
    }

    #[test]
    fn test_z_negates_first_qubit_one() {
        let mut state = TwoQubitState::new(0.1, 0.2, 0.3, 0.4);
        state.apply_z();
        assert_amplitudes(&state, [0.1, 0.2, -0.3, -0.4]);
    }

    #[test]
    fn test_hadamard_leaves_second_qubit_label() {
        let mut state = TwoQubitState::basis("01".parse().unwrap());
        state.apply_hadamard().unwrap();
        assert_amplitudes(&state, [0.0, FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2]);

        let mut state = TwoQubitState::basis("10".parse().unwrap());
        state.apply_hadamard().unwrap();
        assert_amplitudes(&state, [FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2, 0.0]);
    }

    #[test]
    fn test_bell_state_preparation() {
        let mut state = TwoQubitState::default();
        state.apply_hadamard().unwrap();
        assert_amplitudes(&state, [FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2, 0.0]);
        state.apply_cnot();
        assert_amplitudes(&state, [FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2]);
        assert!(!state.is_collapsed());
    }

    #[test]
    fn test_encoding_dispatch() {
        let base = TwoQubitState::new(0.1, 0.2, 0.3, 0.4);

        let mut s = base;
        s.apply_encoding("00".parse().unwrap());
        assert_eq!(s, base);

        let mut s = base;
        s.apply_encoding("01".parse().unwrap());
        assert_amplitudes(&s, [0.3, 0.4, 0.1, 0.2]);

        let mut s = base;
        s.apply_encoding("10".parse().unwrap());
        assert_amplitudes(&s, [0.1, 0.2, -0.3, -0.4]);

        let mut s = base;
        s.apply_encoding("11".parse().unwrap());
        assert_amplitudes(&s, [0.3, 0.4, -0.1, -0.2]);
    }

    #[test]
    fn test_zero_norm_fails_fast() {
        let mut state = TwoQubitState::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(state.apply_hadamard().unwrap_err(), StateError::ZeroNorm);
        assert!(TwoQubitState::normalized(0.0, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_measure_basis_states() {
        for bits in BitPair::ALL {
            for r in [0.0, 0.42, 0.999_999] {
                let mut state = TwoQubitState::basis(bits);
                assert_eq!(state.measure(&mut || r), bits);
                assert_eq!(state.basis_state(), Some(bits));
            }
        }
    }

    #[test]
    fn test_measure_cumulative_uniform() {
        let uniform = TwoQubitState::new(0.5, 0.5, 0.5, 0.5);
        let expected = [(0.1, "00"), (0.3, "01"), (0.6, "10"), (0.9, "11")];
        for (r, label) in expected {
            let mut state = uniform;
            let result = state.measure_with(SamplingMode::Cumulative, &mut || r);
            assert_eq!(result.outcome.to_string(), label);
            assert_relative_eq!(result.probability, 0.25);
            assert_eq!(result.sample, r);
            assert_eq!(state, TwoQubitState::basis(result.outcome));
        }
    }

    #[test]
    fn test_measure_sequential_reproduces_legacy_thresholds() {
        let uniform = TwoQubitState::new(0.5, 0.5, 0.5, 0.5);
        let mut state = uniform;
        assert_eq!(
            state.measure_with(SamplingMode::Sequential, &mut || 0.1).outcome.to_string(),
            "00"
        );
        let mut state = uniform;
        assert_eq!(
            state.measure_with(SamplingMode::Sequential, &mut || 0.3).outcome.to_string(),
            "11"
        );
    }

    #[test]
    fn test_display_skips_zero_terms() {
        assert_eq!(TwoQubitState::default().to_string(), "|00>");
        assert_eq!(
            TwoQubitState::new(0.5, 0.0, 0.0, -0.5).to_string(),
            "0.5 |00> + -0.5 |11>"
        );
        assert_eq!(TwoQubitState::new(0.0, 0.0, 0.0, 0.0).to_string(), "0");

        let mut bell = TwoQubitState::default();
        bell.apply_hadamard().unwrap().apply_cnot();
        assert_eq!(
            bell.display_with(&AmplitudeFormat::rounded(4)),
            "0.7071 |00> + 0.7071 |11>"
        );
    }

    #[test]
    fn test_display_complex_coefficient() {
        let state = TwoQubitState::new(0.0, Complex64::new(0.0, 1.0), 0.0, 0.0);
        assert_eq!(state.to_string(), "(0+1i) |01>");
    }
}
