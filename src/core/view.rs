//! Shared, read-only view of a machine's position.

use super::state::State;
use std::sync::{Arc, PoisonError, RwLock};

/// Where a machine currently is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Cursor<S: State> {
    pub(crate) initial: S,
    pub(crate) current: S,
    pub(crate) previous: Option<S>,
}

impl<S: State> Cursor<S> {
    fn new(initial: S) -> Self {
        Self {
            current: initial.clone(),
            initial,
            previous: None,
        }
    }
}

/// Cloneable read-only handle on a machine's initial, current and
/// previous state.
///
/// A machine hands one of these to its owner when it is bound, so hooks
/// receiving the owner can see the state they are running in. Before
/// hooks observe the pre-transition pair and after hooks the
/// post-transition pair.
///
/// # Example
///
/// ```rust
/// use stateful::machine::StateMachine;
///
/// let machine: StateMachine<u32, ()> = StateMachine::new(0);
/// let view = machine.view();
///
/// assert_eq!(view.current(), 0);
/// assert_eq!(view.previous(), None);
/// ```
#[derive(Debug)]
pub struct StateView<S: State> {
    cursor: Arc<RwLock<Cursor<S>>>,
}

impl<S: State> Clone for StateView<S> {
    fn clone(&self) -> Self {
        Self {
            cursor: Arc::clone(&self.cursor),
        }
    }
}

impl<S: State> StateView<S> {
    pub(crate) fn new(initial: S) -> Self {
        Self {
            cursor: Arc::new(RwLock::new(Cursor::new(initial))),
        }
    }

    /// The state the machine was created in.
    pub fn initial(&self) -> S {
        self.read(|cursor| cursor.initial.clone())
    }

    /// The state the machine occupies now.
    pub fn current(&self) -> S {
        self.read(|cursor| cursor.current.clone())
    }

    /// The state occupied before the most recent committed transition.
    ///
    /// `None` until the first transition commits.
    pub fn previous(&self) -> Option<S> {
        self.read(|cursor| cursor.previous.clone())
    }

    /// Whether two views observe the same machine.
    pub fn same_machine(&self, other: &StateView<S>) -> bool {
        Arc::ptr_eq(&self.cursor, &other.cursor)
    }

    pub(crate) fn snapshot(&self) -> Cursor<S> {
        self.read(Cursor::clone)
    }

    /// Moves the cursor to `to`, remembering where it was.
    pub(crate) fn advance(&self, to: S) {
        let mut cursor = self.cursor.write().unwrap_or_else(PoisonError::into_inner);
        let from = std::mem::replace(&mut cursor.current, to);
        cursor.previous = Some(from);
    }

    fn read<T>(&self, f: impl FnOnce(&Cursor<S>) -> T) -> T {
        // A panicking hook never holds the lock, so a poisoned cursor is
        // still consistent.
        let cursor = self.cursor.read().unwrap_or_else(PoisonError::into_inner);
        f(&cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_view_sits_at_initial() {
        let view = StateView::new(3u32);

        assert_eq!(view.initial(), 3);
        assert_eq!(view.current(), 3);
        assert_eq!(view.previous(), None);
    }

    #[test]
    fn advance_shifts_current_into_previous() {
        let view = StateView::new(0u32);

        view.advance(1);
        assert_eq!(view.current(), 1);
        assert_eq!(view.previous(), Some(0));

        view.advance(1);
        assert_eq!(view.current(), 1);
        assert_eq!(view.previous(), Some(1));
        assert_eq!(view.initial(), 0);
    }

    #[test]
    fn clones_observe_the_same_cursor() {
        let view = StateView::new("idle");
        let clone = view.clone();

        view.advance("busy");

        assert_eq!(clone.current(), "busy");
        assert!(view.same_machine(&clone));
        assert!(!view.same_machine(&StateView::new("idle")));
    }
}
