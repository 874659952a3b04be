//! Owner binding errors.

use thiserror::Error;

/// Errors that can occur when binding an owner to a state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("State machine already has an owner bound")]
    AlreadyBound,

    #[error("Owner's state machine slot is already occupied")]
    SlotOccupied,

    #[error("Owner's state machine slot cannot be set: {reason}")]
    SlotUnavailable { reason: String },
}
