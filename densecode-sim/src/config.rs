//! Protocol simulator configuration

use crate::error::{Result, SimulatorError};
use densecode_core::AmplitudeFormat;
use densecode_state::SamplingMode;

/// Configuration for the superdense coding simulator
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolConfig {
    /// Random number generator seed for reproducibility
    ///
    /// If None, the generator is seeded from system entropy.
    ///
    /// Default: None (random)
    pub seed: Option<u64>,

    /// Rule for turning a uniform sample into a two-qubit outcome
    ///
    /// Default: cumulative
    pub sampling: SamplingMode,

    /// Protocol runs per bit pair when verifying
    ///
    /// Default: 1000
    pub trials: usize,

    /// Digits shown for amplitudes in transcripts (None prints exact values)
    ///
    /// Default: Some(4)
    pub display_precision: Option<usize>,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            seed: None,
            sampling: SamplingMode::Cumulative,
            trials: 1000,
            display_precision: Some(4),
        }
    }
}

impl ProtocolConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_display_precision(mut self, precision: Option<usize>) -> Self {
        self.display_precision = precision;
        self
    }

    /// Amplitude formatting policy for transcripts
    pub fn display_format(&self) -> AmplitudeFormat {
        match self.display_precision {
            Some(digits) => AmplitudeFormat::rounded(digits),
            None => AmplitudeFormat::default(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(SimulatorError::invalid_config("trials must be at least 1"));
        }
        if let Some(digits) = self.display_precision {
            if digits > 17 {
                return Err(SimulatorError::invalid_config(format!(
                    "display precision {} exceeds f64 resolution (max 17)",
                    digits
                )));
            }
        }
        Ok(())
    }
}
