//! Ready-made storage for an owner's state machine view.

use super::error::BindError;
use crate::core::{State, StateView};

/// Settable-once holder for a [`StateView`].
///
/// Starts empty; [`fill`](StateSlot::fill) succeeds exactly once. The
/// accessors return `None` until the slot is filled.
#[derive(Debug)]
pub struct StateSlot<S: State> {
    view: Option<StateView<S>>,
}

impl<S: State> Default for StateSlot<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateSlot<S> {
    pub fn new() -> Self {
        Self { view: None }
    }

    /// Store `view`, refusing to replace one already held.
    pub fn fill(&mut self, view: StateView<S>) -> Result<(), BindError> {
        if self.view.is_some() {
            return Err(BindError::SlotOccupied);
        }
        self.view = Some(view);
        Ok(())
    }

    pub fn is_filled(&self) -> bool {
        self.view.is_some()
    }

    pub fn view(&self) -> Option<&StateView<S>> {
        self.view.as_ref()
    }

    /// Current state of the bound machine.
    pub fn current(&self) -> Option<S> {
        self.view.as_ref().map(StateView::current)
    }

    /// Previous state of the bound machine, if bound and it has moved.
    pub fn previous(&self) -> Option<S> {
        self.view.as_ref().and_then(StateView::previous)
    }
}
