//! Stateful: hook-driven finite state machines attached to owner types.
//!
//! A [`StateMachine`] is created in an initial state, collects before and
//! after hooks for `(from, to)` pairs, and is bound to an owner that every
//! hook receives. Registering a hook is what declares a transition; asking
//! for any other transition is an error.
//!
//! # Core Concepts
//!
//! - **State**: any hashable identifier implementing [`State`]
//! - **Hooks**: typed callables run before or after the state mutation
//! - **Binding**: owners implement [`Stateful`] to receive a [`StateView`]
//! - **History**: in-memory record of committed transitions
//!
//! # Example
//!
//! ```rust
//! use stateful::binding::{BindError, StateSlot, Stateful};
//! use stateful::core::StateView;
//! use stateful::machine::StateMachine;
//! use stateful::state_enum;
//! use std::sync::Mutex;
//!
//! state_enum! {
//!     enum Status {
//!         Draft,
//!         Published,
//!         Archived,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Post {
//!     machine: StateSlot<Status>,
//!     events: Mutex<Vec<String>>,
//! }
//!
//! impl Stateful<Status> for Post {
//!     fn set_state_machine(&mut self, machine: StateView<Status>) -> Result<(), BindError> {
//!         self.machine.fill(machine)
//!     }
//! }
//!
//! let mut machine: StateMachine<Status, Post, String> = StateMachine::new(Status::Draft);
//! machine
//!     .before_transition(Status::Draft, Status::Published, |post: &Post| {
//!         post.events.lock().unwrap().push("validate".into());
//!         Ok(())
//!     })
//!     .after_transition(Status::Draft, Status::Published, |post: &Post| {
//!         post.events.lock().unwrap().push("notify".into());
//!         Ok(())
//!     });
//!
//! let post = machine.bind(Post::default()).unwrap();
//!
//! assert!(machine.transition(Status::Archived).is_err());
//! machine.transition(Status::Published).unwrap();
//!
//! assert_eq!(post.machine.current(), Some(Status::Published));
//! assert_eq!(*post.events.lock().unwrap(), vec!["validate", "notify"]);
//! ```

pub mod binding;
pub mod builder;
pub mod core;
pub mod hooks;
pub mod machine;

// Re-export commonly used types
pub use crate::binding::{BindError, StateSlot, Stateful};
pub use crate::builder::{BuildError, MachineBuilder};
pub use crate::core::{State, StateHistory, StateTransition, StateView};
pub use crate::hooks::{Hook, HookPhase};
pub use crate::machine::{StateMachine, TransitionError};
