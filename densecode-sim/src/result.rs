//! Protocol run transcripts

use densecode_core::{AmplitudeFormat, BitPair};
use densecode_state::{MeasurementResult, TwoQubitState};
use std::fmt;

/// Point in the protocol at which a state snapshot is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Two qubits in |00>
    Initial,
    /// Hadamard applied to the first qubit
    Superposed,
    /// CNOT applied, the pair is a Bell state
    Entangled,
    /// Alice's encoding applied to her qubit
    Encoded,
    /// Bob's CNOT applied
    Disentangled,
    /// Bob's Hadamard applied
    Decoded,
    /// Joint measurement performed
    Measured,
}

impl Stage {
    /// Narration shown before the snapshot
    pub fn narration(self) -> &'static str {
        match self {
            Stage::Initial => "Eve starts with two qubits in state",
            Stage::Superposed => "Eve prepares a Bell state, first with a Hadamard gate on the first qubit:",
            Stage::Entangled => "and then with a controlled NOT gate on the two qubits:",
            Stage::Encoded => "Alice encodes her two bits on her qubit:",
            Stage::Disentangled => "First a controlled NOT:",
            Stage::Decoded => "Then a Hadamard on the first qubit:",
            Stage::Measured => "Finally, Bob measures the qubits in the computational basis:",
        }
    }
}

/// One snapshot of the pair during a run
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolStep {
    pub stage: Stage,

    /// Human-readable description of what happened at this stage
    pub description: String,

    /// The two-qubit state right after this stage
    pub state: TwoQubitState,
}

impl ProtocolStep {
    pub fn new(stage: Stage, state: TwoQubitState) -> Self {
        Self {
            stage,
            description: stage.narration().to_string(),
            state,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Render the snapshot under the given amplitude policy
    pub fn render(&self, format: &AmplitudeFormat) -> String {
        format!("{}\n  {}", self.description, self.state.display_with(format))
    }
}

/// Eve's Bell pair, before Alice has chosen her bits
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedPair {
    /// The entangled pair
    pub state: TwoQubitState,

    /// Snapshots up to and including [`Stage::Entangled`]
    pub steps: Vec<ProtocolStep>,
}

/// Result of transmitting one pair of classical bits
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolRun {
    /// Bits Alice encoded
    pub sent: BitPair,

    /// Bits Bob measured
    pub received: BitPair,

    /// Probability of the observed outcome before collapse
    pub probability: f64,

    /// State snapshots in protocol order
    pub steps: Vec<ProtocolStep>,
}

impl ProtocolRun {
    pub fn new(sent: BitPair, measurement: MeasurementResult<BitPair>, steps: Vec<ProtocolStep>) -> Self {
        Self {
            sent,
            received: measurement.outcome,
            probability: measurement.probability,
            steps,
        }
    }

    /// Whether Bob recovered Alice's bits
    pub fn succeeded(&self) -> bool {
        self.sent == self.received
    }

    /// Snapshot taken at `stage`, if the run reached it
    pub fn step(&self, stage: Stage) -> Option<&ProtocolStep> {
        self.steps.iter().find(|step| step.stage == stage)
    }

    /// Snapshots taken after `stage`, or every snapshot if the run never reached it
    pub fn steps_after(&self, stage: Stage) -> &[ProtocolStep] {
        match self.steps.iter().position(|step| step.stage == stage) {
            Some(idx) => &self.steps[idx + 1..],
            None => &self.steps,
        }
    }
}

impl fmt::Display for ProtocolRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sent {} received {} (p = {:.4}){}",
            self.sent,
            self.received,
            self.probability,
            if self.succeeded() { "" } else { " MISMATCH" }
        )
    }
}
