//! Display policy for complex amplitudes
//!
//! States render as `"<coefficient> |<label>>"` terms. Whether a coefficient
//! is printed as a real or a complex number, whether it is elided, and how
//! many digits it carries are all decided here rather than by matching on
//! already-formatted strings.

use num_complex::Complex64;

/// Formatting policy for amplitude coefficients
///
/// # Example
/// ```
/// use densecode_core::AmplitudeFormat;
/// use num_complex::Complex64;
///
/// let exact = AmplitudeFormat::default();
/// assert_eq!(exact.term(Complex64::new(1.0, 0.0), "00"), "|00>");
/// assert_eq!(exact.term(Complex64::new(-0.5, 0.0), "11"), "-0.5 |11>");
///
/// let rounded = AmplitudeFormat::rounded(3);
/// assert_eq!(rounded.coefficient(Complex64::new(0.0, 1.0)), "(0.000+1.000i)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudeFormat {
    /// Digits after the decimal point, or `None` for the shortest exact form
    pub precision: Option<usize>,

    /// Magnitude under which a value counts as zero (and distance from 1
    /// under which a coefficient is elided)
    pub tolerance: f64,
}

impl Default for AmplitudeFormat {
    fn default() -> Self {
        Self {
            precision: None,
            tolerance: 0.0,
        }
    }
}

impl AmplitudeFormat {
    /// Narration policy with a fixed number of digits
    pub fn rounded(digits: usize) -> Self {
        Self {
            precision: Some(digits),
            tolerance: 1e-9,
        }
    }

    /// Whether an amplitude counts as zero under this policy
    #[inline]
    pub fn is_zero(&self, amp: Complex64) -> bool {
        amp.norm() <= self.tolerance
    }

    /// Whether an amplitude counts as exactly one under this policy
    #[inline]
    pub fn is_one(&self, amp: Complex64) -> bool {
        (amp - Complex64::new(1.0, 0.0)).norm() <= self.tolerance
    }

    /// Render a coefficient, returning an empty string for an elided 1
    pub fn coefficient(&self, amp: Complex64) -> String {
        if self.is_one(amp) {
            return String::new();
        }
        self.value(amp)
    }

    /// Render an amplitude without eliding 1
    pub fn value(&self, amp: Complex64) -> String {
        if amp.im.abs() <= self.tolerance {
            return self.real(amp.re);
        }
        let sign = if amp.im < 0.0 { '-' } else { '+' };
        format!("({}{}{}i)", self.real(amp.re), sign, self.real(amp.im.abs()))
    }

    /// Render one basis term, e.g. `0.5 |01>` or `|00>`
    pub fn term(&self, amp: Complex64, label: &str) -> String {
        let coefficient = self.coefficient(amp);
        if coefficient.is_empty() {
            format!("|{}>", label)
        } else {
            format!("{} |{}>", coefficient, label)
        }
    }

    fn real(&self, value: f64) -> String {
        // Avoid printing "-0" for values that are zero under the policy
        let value = if value.abs() <= self.tolerance { 0.0 } else { value };
        match self.precision {
            Some(digits) => format!("{:.*}", digits, value),
            None => format!("{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_exact_real_values() {
        let fmt = AmplitudeFormat::default();
        assert_eq!(fmt.coefficient(c(0.25, 0.0)), "0.25");
        assert_eq!(fmt.coefficient(c(-1.0, 0.0)), "-1");
        assert_eq!(fmt.value(c(1.0, 0.0)), "1");
        assert_eq!(fmt.value(c(-0.0, 0.0)), "0");
    }

    #[test]
    fn test_one_is_elided_only_when_exact() {
        let fmt = AmplitudeFormat::default();
        assert_eq!(fmt.coefficient(c(1.0, 0.0)), "");
        assert_eq!(fmt.coefficient(c(0.9999999999999999, 0.0)), "0.9999999999999999");
        assert_eq!(fmt.term(c(1.0, 0.0), "10"), "|10>");
    }

    #[test]
    fn test_tolerant_elision() {
        let fmt = AmplitudeFormat::rounded(4);
        assert_eq!(fmt.coefficient(c(0.9999999999999999, 0.0)), "");
        assert!(fmt.is_zero(c(1e-12, -1e-12)));
        assert_eq!(fmt.value(c(-1e-12, 0.0)), "0.0000");
    }

    #[test]
    fn test_complex_values() {
        let fmt = AmplitudeFormat::default();
        assert_eq!(fmt.value(c(0.5, 0.5)), "(0.5+0.5i)");
        assert_eq!(fmt.value(c(0.0, -1.0)), "(0-1i)");
        assert_eq!(fmt.term(c(0.5, -0.5), "01"), "(0.5-0.5i) |01>");
    }

    #[test]
    fn test_rounded_precision() {
        let fmt = AmplitudeFormat::rounded(4);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_eq!(fmt.term(c(h, 0.0), "00"), "0.7071 |00>");
        assert_eq!(fmt.term(c(-h, 0.0), "11"), "-0.7071 |11>");
    }
}
