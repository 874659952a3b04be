//! Core state machine types.
//!
//! This module contains the pieces every machine is built from:
//! - State identifiers via the `State` trait
//! - The shared `StateView` handed to owners
//! - Transition history tracking

mod history;
mod state;
mod view;

pub use history::{StateHistory, StateTransition};
pub use state::State;
pub use view::StateView;
