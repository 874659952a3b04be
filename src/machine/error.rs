//! Transition errors.

use crate::core::State;
use thiserror::Error;

/// Errors returned by [`StateMachine::transition`](super::StateMachine::transition).
///
/// `S` is the machine's state type and `E` the hook error type. Hook
/// errors are carried unchanged; the variant records whether the state
/// mutation had already committed.
#[derive(Debug, Error, PartialEq)]
pub enum TransitionError<S: State, E> {
    #[error(
        "Cannot transition from '{}' to '{}': no hooks registered for this pair",
        .from.name(),
        .to.name()
    )]
    Invalid { from: S, to: S },

    #[error("No owner bound to the state machine")]
    Unbound,

    /// A before hook failed. The remaining before hooks were skipped and
    /// the state did not change.
    #[error("Before-transition hook failed")]
    BeforeHook(#[source] E),

    /// An after hook failed. The remaining after hooks were skipped but
    /// the state change had already committed.
    #[error("After-transition hook failed")]
    AfterHook(#[source] E),
}

impl<S: State, E> TransitionError<S, E> {
    /// Whether the machine moved to the requested state despite the error.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::AfterHook(_))
    }

    /// The error raised by a hook, if a hook raised it.
    pub fn into_hook_error(self) -> Option<E> {
        match self {
            Self::BeforeHook(err) | Self::AfterHook(err) => Some(err),
            Self::Invalid { .. } | Self::Unbound => None,
        }
    }
}
