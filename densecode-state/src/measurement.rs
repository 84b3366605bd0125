//! Computational basis measurement
//!
//! Both state types collapse through the same outcome selection: one uniform
//! sample `r` in [0, 1) is drawn from the caller's random source and compared
//! against the outcome probabilities. The comparison rule is a
//! [`SamplingMode`].

use std::fmt;
use std::str::FromStr;

/// Rule used to turn a uniform sample into a basis outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SamplingMode {
    /// Compare `r` against running sums p0, p0+p1, ... (inverse CDF sampling)
    #[default]
    Cumulative,

    /// Compare `r` against each raw probability in turn, falling through to
    /// the last outcome. Biased toward the last outcome whenever more than
    /// one outcome has non-zero probability; kept to reproduce historical runs.
    Sequential,
}

impl SamplingMode {
    /// Pick the outcome index for the uniform sample `r`
    ///
    /// In cumulative mode, if floating-point shortfall leaves `r` above the
    /// final running sum, the last outcome with non-zero probability wins.
    pub fn select(self, probabilities: &[f64], r: f64) -> usize {
        let last = probabilities.len().saturating_sub(1);
        match self {
            SamplingMode::Cumulative => {
                let mut cumulative = 0.0;
                let mut fallback = last;
                for (idx, &prob) in probabilities.iter().enumerate() {
                    if prob > 0.0 {
                        fallback = idx;
                    }
                    cumulative += prob;
                    if r < cumulative {
                        return idx;
                    }
                }
                fallback
            },
            SamplingMode::Sequential => probabilities[..last]
                .iter()
                .position(|&prob| r < prob)
                .unwrap_or(last),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SamplingMode::Cumulative => "cumulative",
            SamplingMode::Sequential => "sequential",
        }
    }
}

impl fmt::Display for SamplingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SamplingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cumulative" => Ok(SamplingMode::Cumulative),
            "sequential" => Ok(SamplingMode::Sequential),
            other => Err(format!(
                "unknown sampling mode '{}', expected 'cumulative' or 'sequential'",
                other
            )),
        }
    }
}

/// Result of a single measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementResult<T> {
    /// Observed outcome
    pub outcome: T,

    /// Probability of this outcome before collapse
    pub probability: f64,

    /// Uniform sample that selected the outcome
    pub sample: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIFORM: [f64; 4] = [0.25, 0.25, 0.25, 0.25];

    #[test]
    fn test_cumulative_uniform() {
        let mode = SamplingMode::Cumulative;
        assert_eq!(mode.select(&UNIFORM, 0.0), 0);
        assert_eq!(mode.select(&UNIFORM, 0.3), 1);
        assert_eq!(mode.select(&UNIFORM, 0.6), 2);
        assert_eq!(mode.select(&UNIFORM, 0.99), 3);
    }

    #[test]
    fn test_sequential_uniform_is_biased() {
        let mode = SamplingMode::Sequential;
        assert_eq!(mode.select(&UNIFORM, 0.1), 0);
        // 0.3 exceeds every raw threshold and falls through to the last outcome
        assert_eq!(mode.select(&UNIFORM, 0.3), 3);
        assert_eq!(mode.select(&UNIFORM, 0.6), 3);
    }

    #[test]
    fn test_deterministic_distributions() {
        for mode in [SamplingMode::Cumulative, SamplingMode::Sequential] {
            assert_eq!(mode.select(&[0.0, 1.0, 0.0, 0.0], 0.0), 1);
            assert_eq!(mode.select(&[0.0, 1.0, 0.0, 0.0], 0.999), 1);
            assert_eq!(mode.select(&[1.0, 0.0], 0.5), 0);
            assert_eq!(mode.select(&[0.0, 1.0], 0.5), 1);
        }
    }

    #[test]
    fn test_cumulative_shortfall_falls_back_to_last_nonzero() {
        let probs = [0.0, 0.9999999999999998, 0.0, 0.0];
        assert_eq!(SamplingMode::Cumulative.select(&probs, 0.9999999999999999), 1);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("cumulative".parse::<SamplingMode>().unwrap(), SamplingMode::Cumulative);
        assert_eq!(" Sequential ".parse::<SamplingMode>().unwrap(), SamplingMode::Sequential);
        assert!("random".parse::<SamplingMode>().is_err());
        assert_eq!(SamplingMode::Sequential.to_string(), "sequential");
    }
}
