//! The transition engine.
//!
//! [`StateMachine`] holds the hook tables, the current/previous state and
//! the bound owner, and drives transitions through the hooks.
//!
//! # Transition protocol
//!
//! - Undeclared transitions fail with [`TransitionError::Invalid`] and run nothing
//! - Before hooks observe the pre-transition state
//! - After hooks observe the post-transition state
//! - Hook errors stop their phase and surface unchanged in the error

mod error;
#[allow(clippy::module_inception)]
mod machine;

pub use error::TransitionError;
pub use machine::StateMachine;
