//! Superdense coding protocol engine
//!
//! Eve prepares a Bell pair from |00> (Hadamard on the first qubit, then
//! CNOT). Alice encodes two classical bits by acting on the first qubit
//! alone. Bob undoes Eve's preparation (CNOT, then Hadamard) and measures
//! both qubits, recovering Alice's bits with probability 1.

use crate::config::ProtocolConfig;
use crate::encoding::Encoding;
use crate::error::Result;
use crate::result::{PreparedPair, ProtocolRun, ProtocolStep, Stage};
use crate::statistics::TrialStatistics;
use densecode_core::{AmplitudeFormat, BitPair};
use densecode_state::{MeasurementResult, TwoQubitState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Superdense coding simulator
///
/// Owns the random source consumed by measurement, so a seeded config gives
/// reproducible runs.
///
/// # Example
///
/// ```
/// use densecode_sim::{ProtocolConfig, SuperdenseCoding};
///
/// let mut protocol = SuperdenseCoding::new(ProtocolConfig::new().with_seed(42))?;
/// let run = protocol.transmit("10".parse().unwrap())?;
/// assert!(run.succeeded());
/// # Ok::<(), densecode_sim::SimulatorError>(())
/// ```
pub struct SuperdenseCoding {
    config: ProtocolConfig,
    format: AmplitudeFormat,
    rng: StdRng,
}

impl SuperdenseCoding {
    /// Create a simulator, validating the configuration
    pub fn new(config: ProtocolConfig) -> Result<Self> {
        config.validate()?;

        let rng = if let Some(seed) = config.seed {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        };

        Ok(Self {
            format: config.display_format(),
            config,
            rng,
        })
    }

    pub fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    /// Eve's preparation: |00> -> Hadamard -> CNOT
    pub fn prepare(&self) -> Result<TwoQubitState> {
        let mut state = TwoQubitState::default();
        state.apply_hadamard()?.apply_cnot();
        debug!(state = %state.display_with(&self.format), "bell pair prepared");
        Ok(state)
    }

    /// Alice's encoding of `bits` on the first qubit
    pub fn encode(&self, state: &mut TwoQubitState, bits: BitPair) -> Encoding {
        let encoding = Encoding::for_bits(bits);
        encoding.apply(state);
        debug!(%bits, %encoding, state = %state.display_with(&self.format), "bits encoded");
        encoding
    }

    /// Bob's decoding: CNOT -> Hadamard -> joint measurement
    pub fn decode(&mut self, mut state: TwoQubitState) -> Result<BitPair> {
        state.apply_cnot().apply_hadamard()?;
        Ok(self.measure(&mut state).outcome)
    }

    /// Run the whole protocol for `bits` without recording a transcript
    pub fn send(&mut self, bits: BitPair) -> Result<BitPair> {
        let mut state = self.prepare()?;
        self.encode(&mut state, bits);
        let received = self.decode(state)?;
        if received != bits {
            warn!(sent = %bits, %received, "decoded bits differ from encoded bits");
        }
        Ok(received)
    }

    /// Eve's preparation, keeping a snapshot after each gate
    pub fn prepare_transcript(&self) -> Result<PreparedPair> {
        let mut steps = Vec::with_capacity(7);
        let mut state = TwoQubitState::default();
        self.record(&mut steps, ProtocolStep::new(Stage::Initial, state));

        state.apply_hadamard()?;
        self.record(&mut steps, ProtocolStep::new(Stage::Superposed, state));

        state.apply_cnot();
        self.record(&mut steps, ProtocolStep::new(Stage::Entangled, state));

        Ok(PreparedPair { state, steps })
    }

    /// Carry a prepared pair through Alice's encoding of `bits` and Bob's decoding
    pub fn complete(&mut self, prepared: PreparedPair, bits: BitPair) -> Result<ProtocolRun> {
        let PreparedPair { mut state, mut steps } = prepared;

        let encoding = self.encode(&mut state, bits);
        self.record(
            &mut steps,
            ProtocolStep::new(Stage::Encoded, state).with_description(encoding.description()),
        );

        state.apply_cnot();
        self.record(&mut steps, ProtocolStep::new(Stage::Disentangled, state));

        state.apply_hadamard()?;
        self.record(&mut steps, ProtocolStep::new(Stage::Decoded, state));

        let measurement = self.measure(&mut state);
        self.record(&mut steps, ProtocolStep::new(Stage::Measured, state));

        let run = ProtocolRun::new(bits, measurement, steps);
        if run.succeeded() {
            info!(sent = %run.sent, received = %run.received, "protocol run complete");
        } else {
            warn!(sent = %run.sent, received = %run.received, "protocol run decoded the wrong bits");
        }
        Ok(run)
    }

    /// Run the whole protocol for `bits`, recording every intermediate state
    pub fn transmit(&mut self, bits: BitPair) -> Result<ProtocolRun> {
        let prepared = self.prepare_transcript()?;
        self.complete(prepared, bits)
    }

    /// Send every bit pair `trials` times and tally the decoded outcomes
    pub fn run_trials(&mut self, trials: usize) -> Result<TrialStatistics> {
        let start = Instant::now();
        let mut stats = TrialStatistics::new();

        for bits in BitPair::ALL {
            for _ in 0..trials {
                let received = self.send(bits)?;
                stats.record(bits, received);
            }
        }

        stats.elapsed = start.elapsed();
        info!(
            runs = stats.total_runs(),
            failures = stats.failures(),
            sampling = %self.config.sampling,
            "trials finished"
        );
        Ok(stats)
    }

    /// Run the configured number of trials
    pub fn verify(&mut self) -> Result<TrialStatistics> {
        self.run_trials(self.config.trials)
    }

    fn record(&self, steps: &mut Vec<ProtocolStep>, step: ProtocolStep) {
        debug!(stage = ?step.stage, state = %step.state.display_with(&self.format), "protocol step");
        steps.push(step);
    }

    fn measure(&mut self, state: &mut TwoQubitState) -> MeasurementResult<BitPair> {
        let mode = self.config.sampling;
        let rng = &mut self.rng;
        let result = state.measure_with(mode, &mut || rng.gen::<f64>());
        debug!(outcome = %result.outcome, probability = result.probability, "pair measured");
        result
    }
}
