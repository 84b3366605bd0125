//! Command-line interface definitions

use crate::config::ProtocolConfig;
use clap::{Parser, Subcommand};
use densecode_core::BitPair;
use densecode_state::SamplingMode;

/// Superdense coding simulator
#[derive(Parser, Debug)]
#[command(name = "densecode")]
#[command(author, version, about = "Send two classical bits through one qubit of a Bell pair")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Seed for the measurement random source
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Two-qubit sampling rule: cumulative or sequential
    #[arg(long, global = true, default_value = "cumulative")]
    pub sampling: SamplingMode,

    /// Digits shown for amplitudes
    #[arg(long, global = true, default_value_t = 4)]
    pub precision: usize,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Narrate one protocol run for the given bits, e.g. `send 10`
    Send {
        /// Two classical bits to encode
        bits: BitPair,
    },

    /// Prompt for the two bits on stdin, then narrate the run
    Interactive,

    /// Run every bit pair repeatedly and report decoding success
    Verify {
        /// Runs per bit pair
        #[arg(long, default_value_t = 1000)]
        trials: usize,
    },
}

impl Cli {
    /// Protocol configuration selected by the global flags
    pub fn config(&self) -> ProtocolConfig {
        let mut config = ProtocolConfig::new()
            .with_sampling(self.sampling)
            .with_display_precision(Some(self.precision));
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Commands::Verify { trials } = self.command {
            config = config.with_trials(trials);
        }
        config
    }
}
