//! Attaching a state machine to its owner.
//!
//! An owner opts in by implementing [`Stateful`]. Binding hands the owner
//! a [`StateView`] of the machine and stores the owner in the machine so
//! hooks can be called with it. Most owners embed a [`StateSlot`] and
//! forward to it.
//!
//! # Example
//!
//! ```rust
//! use stateful::binding::{BindError, StateSlot, Stateful};
//! use stateful::core::StateView;
//! use stateful::machine::StateMachine;
//!
//! #[derive(Default)]
//! struct Article {
//!     machine: StateSlot<u8>,
//! }
//!
//! impl Stateful<u8> for Article {
//!     fn set_state_machine(&mut self, machine: StateView<u8>) -> Result<(), BindError> {
//!         self.machine.fill(machine)
//!     }
//! }
//!
//! let mut machine: StateMachine<u8, Article> = StateMachine::new(0);
//! let article = machine.bind(Article::default()).unwrap();
//!
//! assert_eq!(article.machine.current(), Some(0));
//! ```

pub mod error;
mod slot;

pub use error::BindError;
pub use slot::StateSlot;

use crate::core::{State, StateView};

/// Capability of an owner type to hold a view of its state machine.
///
/// Implementations store the view somewhere the owner's hooks can reach
/// it. Return [`BindError::SlotOccupied`] when a view is already held
/// and [`BindError::SlotUnavailable`] when the owner refuses one.
pub trait Stateful<S: State> {
    fn set_state_machine(&mut self, machine: StateView<S>) -> Result<(), BindError>;
}

impl<S: State> Stateful<S> for StateSlot<S> {
    fn set_state_machine(&mut self, machine: StateView<S>) -> Result<(), BindError> {
        self.fill(machine)
    }
}
