//! Error types for the protocol simulator

use std::fmt;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors that can occur while running the protocol
#[derive(Debug, Clone, PartialEq)]
pub enum SimulatorError {
    /// Invalid configuration
    InvalidConfig(String),

    /// State error from gate application or normalization
    StateError {
        message: String,
    },
}

impl SimulatorError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        SimulatorError::InvalidConfig(msg.into())
    }
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::InvalidConfig(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            SimulatorError::StateError { message } => {
                write!(f, "State error: {}", message)
            }
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<densecode_state::StateError> for SimulatorError {
    fn from(err: densecode_state::StateError) -> Self {
        SimulatorError::StateError {
            message: err.to_string(),
        }
    }
}
