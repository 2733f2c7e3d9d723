//! Error types for the session engine and its collaborators.

use crate::sim::SessionPhase;

/// Errors raised by the session engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// A summary was requested for a session that has not ended yet
    #[error("Invalid state: session is {phase:?}, expected Ended")]
    InvalidState { phase: SessionPhase },
}

/// Errors raised by a reward recorder.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Reward service unavailable: {0}")]
    Unavailable(String),

    #[error("Reward rejected: {0}")]
    Rejected(String),
}
