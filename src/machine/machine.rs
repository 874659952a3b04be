//! The transition registry: hook tables, state, owner, and the
//! transition protocol.

use crate::binding::{BindError, Stateful};
use crate::core::{State, StateHistory, StateTransition, StateView};
use crate::hooks::{Hook, HookPhase, HookTable};
use crate::machine::error::TransitionError;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Finite state machine attached to an owner of type `O`.
///
/// Transitions are declared by registering hooks: a move from the
/// current state to `to` is legal exactly when at least one before or
/// after hook exists for that pair. Hooks receive the bound owner and
/// may fail with `E`.
///
/// # Example
///
/// ```rust
/// use stateful::binding::StateSlot;
/// use stateful::machine::StateMachine;
///
/// let mut machine: StateMachine<u32, StateSlot<u32>> = StateMachine::new(0);
/// machine
///     .before_transition(0, 1, |slot: &StateSlot<u32>| {
///         assert_eq!(slot.current(), Some(0));
///         Ok(())
///     })
///     .after_transition(0, 1, |slot: &StateSlot<u32>| {
///         assert_eq!(slot.current(), Some(1));
///         Ok(())
///     });
/// machine.bind(StateSlot::new()).unwrap();
///
/// assert!(machine.can_transition_to(&1));
/// assert!(!machine.can_transition_to(&2));
///
/// machine.transition(1).unwrap();
/// assert_eq!(machine.current(), 1);
/// assert_eq!(machine.previous(), Some(0));
/// ```
pub struct StateMachine<S: State, O, E = Infallible> {
    view: StateView<S>,
    before: HookTable<S, O, E>,
    after: HookTable<S, O, E>,
    owner: Option<Arc<O>>,
    history: StateHistory<S>,
}

impl<S: State, O, E> StateMachine<S, O, E> {
    /// Create a machine sitting in `initial` with no hooks and no owner.
    pub fn new(initial: S) -> Self {
        Self {
            view: StateView::new(initial),
            before: HookTable::new(),
            after: HookTable::new(),
            owner: None,
            history: StateHistory::new(),
        }
    }

    /// Append a hook that runs before the state moves from `from` to `to`.
    ///
    /// Registering also declares the transition legal. The same pair
    /// may collect any number of hooks.
    pub fn before_transition<F>(&mut self, from: S, to: S, hook: F) -> &mut Self
    where
        F: Fn(&O) -> Result<(), E> + Send + Sync + 'static,
    {
        self.register(HookPhase::Before, from, to, Hook::new(hook))
    }

    /// Append a hook that runs after the state has moved from `from` to `to`.
    pub fn after_transition<F>(&mut self, from: S, to: S, hook: F) -> &mut Self
    where
        F: Fn(&O) -> Result<(), E> + Send + Sync + 'static,
    {
        self.register(HookPhase::After, from, to, Hook::new(hook))
    }

    /// Append an already built hook to the given phase.
    pub fn register(&mut self, phase: HookPhase, from: S, to: S, hook: Hook<O, E>) -> &mut Self {
        trace!(%phase, from = %from.name(), to = %to.name(), "registering hook");
        match phase {
            HookPhase::Before => self.before.push(from, to, hook),
            HookPhase::After => self.after.push(from, to, hook),
        }
        self
    }

    /// Whether a transition from the current state to `to` is declared.
    pub fn can_transition_to(&self, to: &S) -> bool {
        let current = self.view.current();
        self.before.contains(&current, to) || self.after.contains(&current, to)
    }

    /// Move the machine to `to`, running the registered hooks.
    ///
    /// Order of operations:
    /// 1. reject undeclared transitions with [`TransitionError::Invalid`]
    /// 2. reject machines without an owner with [`TransitionError::Unbound`]
    /// 3. run every before hook for `(current, to)` in registration order
    /// 4. set previous to current and current to `to`
    /// 5. run every after hook for the same pair in registration order
    ///
    /// Self-loops are ordinary transitions when hooks are registered for
    /// `(s, s)`.
    ///
    /// A failing before hook stops the remaining before hooks and leaves
    /// the state untouched ([`TransitionError::BeforeHook`]). A failing
    /// after hook stops the remaining after hooks, but the state change
    /// has already committed ([`TransitionError::AfterHook`]). Side
    /// effects of hooks that already ran are never undone.
    pub fn transition(&mut self, to: S) -> Result<&mut Self, TransitionError<S, E>> {
        let from = self.view.current();

        if !self.can_transition_to(&to) {
            debug!(from = %from.name(), to = %to.name(), "rejected undeclared transition");
            return Err(TransitionError::Invalid { from, to });
        }

        let Some(owner) = self.owner.as_ref().map(Arc::clone) else {
            debug!(from = %from.name(), to = %to.name(), "rejected transition without owner");
            return Err(TransitionError::Unbound);
        };

        run_hooks(HookPhase::Before, self.before.get(&from, &to), &*owner, &from, &to)
            .map_err(TransitionError::BeforeHook)?;

        self.view.advance(to.clone());
        self.history.push(StateTransition::now(from.clone(), to.clone()));
        debug!(from = %from.name(), to = %to.name(), "committed transition");

        run_hooks(HookPhase::After, self.after.get(&from, &to), &*owner, &from, &to)
            .map_err(TransitionError::AfterHook)?;

        Ok(self)
    }

    /// Attach `owner` to this machine.
    ///
    /// The owner receives a [`StateView`] through
    /// [`Stateful::set_state_machine`], then is stored behind an `Arc`
    /// that every hook call borrows from. The returned handle shares the
    /// stored owner. Nothing is stored when binding fails.
    pub fn bind(&mut self, mut owner: O) -> Result<Arc<O>, BindError>
    where
        O: Stateful<S>,
    {
        if self.owner.is_some() {
            return Err(BindError::AlreadyBound);
        }

        owner.set_state_machine(self.view.clone())?;

        let owner = Arc::new(owner);
        self.owner = Some(Arc::clone(&owner));
        let current = self.view.current();
        debug!(current = %current.name(), "bound owner to state machine");
        Ok(owner)
    }

    /// The state fixed at construction.
    pub fn initial(&self) -> S {
        self.view.initial()
    }

    /// The state the machine occupies now.
    pub fn current(&self) -> S {
        self.view.current()
    }

    /// The state before the most recent committed transition, `None`
    /// until one commits.
    pub fn previous(&self) -> Option<S> {
        self.view.previous()
    }

    /// A read-only handle that follows this machine's state.
    pub fn view(&self) -> StateView<S> {
        self.view.clone()
    }

    /// The bound owner, if any.
    pub fn owner(&self) -> Option<&Arc<O>> {
        self.owner.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.owner.is_some()
    }

    /// Committed transitions, oldest first.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Distinct states reachable from the current state.
    ///
    /// Targets of before hooks come first, then targets only declared by
    /// after hooks, each in first-registration order.
    pub fn available_transitions(&self) -> Vec<S> {
        let current = self.view.current();
        let mut targets: Vec<S> = Vec::new();
        for to in self
            .before
            .targets(&current)
            .iter()
            .chain(self.after.targets(&current))
        {
            if !targets.contains(to) {
                targets.push(to.clone());
            }
        }
        targets
    }

    /// Distinct states with at least one outgoing transition declared.
    ///
    /// Sources of before hooks come first, then sources only declared by
    /// after hooks, each in first-registration order.
    pub fn declared_sources(&self) -> Vec<S> {
        let mut sources: Vec<S> = Vec::new();
        for from in self.before.sources().iter().chain(self.after.sources()) {
            if !sources.contains(from) {
                sources.push(from.clone());
            }
        }
        sources
    }

    /// Whether no transition leaves the current state.
    pub fn is_terminal(&self) -> bool {
        let current = self.view.current();
        self.before.targets(&current).is_empty() && self.after.targets(&current).is_empty()
    }

    /// Hooks registered for `(from, to)` in the given phase.
    pub fn hooks(&self, phase: HookPhase, from: &S, to: &S) -> &[Hook<O, E>] {
        match phase {
            HookPhase::Before => self.before.get(from, to),
            HookPhase::After => self.after.get(from, to),
        }
    }
}

impl<S: State, O, E> fmt::Debug for StateMachine<S, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cursor = self.view.snapshot();
        f.debug_struct("StateMachine")
            .field("initial", &cursor.initial)
            .field("current", &cursor.current)
            .field("previous", &cursor.previous)
            .field("before_hooks", &self.before.len())
            .field("after_hooks", &self.after.len())
            .field("bound", &self.owner.is_some())
            .finish()
    }
}

fn run_hooks<S: State, O, E>(
    phase: HookPhase,
    hooks: &[Hook<O, E>],
    owner: &O,
    from: &S,
    to: &S,
) -> Result<(), E> {
    for (index, hook) in hooks.iter().enumerate() {
        trace!(%phase, index, from = %from.name(), to = %to.name(), "running hook");
        if let Err(err) = hook.call(owner) {
            warn!(%phase, index, from = %from.name(), to = %to.name(), "hook failed");
            return Err(err);
        }
    }
    Ok(())
}
