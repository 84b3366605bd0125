//! Superdense coding simulator
//!
//! This crate drives the two-qubit state from `densecode-state` through the
//! superdense coding protocol: Eve prepares a Bell pair, Alice encodes two
//! classical bits with local gates on her qubit, and Bob decodes them with a
//! joint measurement.
//!
//! # Features
//!
//! - **Seeded randomness**: measurement draws from a `StdRng` owned by the simulator
//! - **Transcripts**: every intermediate state of a run is recorded
//! - **Verification**: repeated runs over all four bit pairs with success statistics
//! - **Narration**: console walkthrough used by the `densecode` binary
//!
//! # Example
//!
//! ```
//! use densecode_sim::{ProtocolConfig, SuperdenseCoding};
//!
//! let config = ProtocolConfig::new().with_seed(7).with_trials(10);
//! let mut protocol = SuperdenseCoding::new(config)?;
//!
//! let stats = protocol.verify()?;
//! assert_eq!(stats.failures(), 0);
//! # Ok::<(), densecode_sim::SimulatorError>(())
//! ```

pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod narrate;
pub mod protocol;
pub mod result;
pub mod statistics;

pub use cli::{Cli, Commands};
pub use config::ProtocolConfig;
pub use encoding::Encoding;
pub use error::{Result, SimulatorError};
pub use protocol::SuperdenseCoding;
pub use result::{PreparedPair, ProtocolRun, ProtocolStep, Stage};
pub use statistics::TrialStatistics;
