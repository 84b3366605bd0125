//! Norm computation and normalization checks shared by both state types

use crate::error::{Result, StateError};
use num_complex::Complex64;

/// Euclidean norm of an amplitude vector
#[inline]
pub fn norm(amplitudes: &[Complex64]) -> f64 {
    amplitudes.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt()
}

/// Squared magnitudes of every amplitude
pub fn probabilities<const N: usize>(amplitudes: &[Complex64; N]) -> [f64; N] {
    let mut probs = [0.0; N];
    for (p, a) in probs.iter_mut().zip(amplitudes.iter()) {
        *p = a.norm_sqr();
    }
    probs
}

/// Whether |norm - 1| < epsilon
#[inline]
pub fn is_normalized(amplitudes: &[Complex64], epsilon: f64) -> bool {
    (norm(amplitudes) - 1.0).abs() < epsilon
}

/// Divide every amplitude by the vector's norm
///
/// # Errors
/// `ZeroNorm` for the zero vector; `NonFinite` if an amplitude is NaN or
/// infinite. The amplitudes are untouched on error.
pub fn normalize_in_place(amplitudes: &mut [Complex64]) -> Result<()> {
    check_finite(amplitudes)?;
    let norm = norm(amplitudes);
    if norm == 0.0 {
        return Err(StateError::ZeroNorm);
    }
    for amp in amplitudes.iter_mut() {
        *amp /= norm;
    }
    Ok(())
}

/// Index of the only non-zero amplitude if it has unit magnitude
///
/// A state satisfying this is collapsed: measuring it yields that basis
/// state with probability 1.
pub fn one_hot_index(amplitudes: &[Complex64]) -> Option<usize> {
    let mut found = None;
    for (idx, amp) in amplitudes.iter().enumerate() {
        if *amp == Complex64::new(0.0, 0.0) {
            continue;
        }
        if amp.norm_sqr() != 1.0 || found.is_some() {
            return None;
        }
        found = Some(idx);
    }
    found
}

/// Overwrite the vector with the basis state `index`
pub(crate) fn collapse_to(amplitudes: &mut [Complex64], index: usize) {
    for (idx, amp) in amplitudes.iter_mut().enumerate() {
        *amp = if idx == index {
            Complex64::new(1.0, 0.0)
        } else {
            Complex64::new(0.0, 0.0)
        };
    }
}

fn check_finite(amplitudes: &[Complex64]) -> Result<()> {
    match amplitudes.iter().position(|a| !a.is_finite()) {
        Some(index) => Err(StateError::NonFinite { index }),
        None => Ok(()),
    }
}
