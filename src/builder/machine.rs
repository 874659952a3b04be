//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::hooks::{Hook, HookPhase};
use crate::machine::StateMachine;
use std::convert::Infallible;

struct PendingHook<S, O, E> {
    phase: HookPhase,
    from: S,
    to: S,
    hook: Hook<O, E>,
}

/// Builder for constructing state machines with a fluent API.
///
/// Hooks are registered on the built machine in the order they were
/// added to the builder.
///
/// # Example
///
/// ```rust
/// use stateful::binding::StateSlot;
/// use stateful::builder::MachineBuilder;
///
/// let machine = MachineBuilder::<u8, StateSlot<u8>>::new()
///     .initial(0)
///     .before(0, 1, |_: &StateSlot<u8>| Ok(()))
///     .after(1, 2, |_: &StateSlot<u8>| Ok(()))
///     .build()
///     .unwrap();
///
/// assert!(machine.can_transition_to(&1));
/// assert!(!machine.can_transition_to(&2));
/// ```
pub struct MachineBuilder<S: State, O, E = Infallible> {
    initial: Option<S>,
    hooks: Vec<PendingHook<S, O, E>>,
}

impl<S: State, O, E> MachineBuilder<S, O, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            hooks: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a before hook for `(from, to)`.
    pub fn before<F>(self, from: S, to: S, hook: F) -> Self
    where
        F: Fn(&O) -> Result<(), E> + Send + Sync + 'static,
    {
        self.hook(HookPhase::Before, from, to, Hook::new(hook))
    }

    /// Add an after hook for `(from, to)`.
    pub fn after<F>(self, from: S, to: S, hook: F) -> Self
    where
        F: Fn(&O) -> Result<(), E> + Send + Sync + 'static,
    {
        self.hook(HookPhase::After, from, to, Hook::new(hook))
    }

    /// Add a pre-built hook to the given phase.
    pub fn hook(mut self, phase: HookPhase, from: S, to: S, hook: Hook<O, E>) -> Self {
        self.hooks.push(PendingHook {
            phase,
            from,
            to,
            hook,
        });
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine<S, O, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = StateMachine::new(initial);
        for pending in self.hooks {
            machine.register(pending.phase, pending.from, pending.to, pending.hook);
        }

        Ok(machine)
    }
}

impl<S: State, O, E> Default for MachineBuilder<S, O, E> {
    fn default() -> Self {
        Self::new()
    }
}
