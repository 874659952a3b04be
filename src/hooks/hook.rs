//! Transition hooks.
//!
//! A hook is a callable taking the machine's owner. Before hooks run
//! ahead of the state mutation, after hooks behind it.

use std::fmt;
use std::sync::Arc;

/// Which side of the state mutation a hook runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookPhase {
    Before,
    After,
}

impl fmt::Display for HookPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => f.write_str("before"),
            Self::After => f.write_str("after"),
        }
    }
}

/// Callable invoked with the owner during a transition.
///
/// Returning `Err` stops the remaining hooks of the same phase; the
/// error reaches the caller of
/// [`transition`](crate::machine::StateMachine::transition) untouched.
///
/// # Example
///
/// ```rust
/// use stateful::hooks::Hook;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// struct Counter {
///     calls: AtomicUsize,
/// }
///
/// let hook: Hook<Counter, String> = Hook::new(|owner: &Counter| {
///     owner.calls.fetch_add(1, Ordering::SeqCst);
///     Ok(())
/// });
///
/// let counter = Counter { calls: AtomicUsize::new(0) };
/// hook.call(&counter).unwrap();
/// hook.clone().call(&counter).unwrap();
/// assert_eq!(counter.calls.load(Ordering::SeqCst), 2);
/// ```
pub struct Hook<O, E> {
    callback: Arc<dyn Fn(&O) -> Result<(), E> + Send + Sync>,
}

impl<O, E> Hook<O, E> {
    /// Wrap a callable taking the owner.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&O) -> Result<(), E> + Send + Sync + 'static,
    {
        Hook {
            callback: Arc::new(callback),
        }
    }

    /// Invoke the hook with the owner.
    pub fn call(&self, owner: &O) -> Result<(), E> {
        (self.callback)(owner)
    }
}

impl<O, E> Clone for Hook<O, E> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<O, E> fmt::Debug for Hook<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook").finish_non_exhaustive()
    }
}

impl<O, E, F> From<F> for Hook<O, E>
where
    F: Fn(&O) -> Result<(), E> + Send + Sync + 'static,
{
    fn from(callback: F) -> Self {
        Hook::new(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Owner {
        seen: Mutex<Vec<&'static str>>,
    }

    #[test]
    fn hook_receives_owner() {
        let hook: Hook<Owner, ()> = Hook::new(|owner: &Owner| {
            owner.seen.lock().unwrap().push("called");
            Ok(())
        });
        let owner = Owner {
            seen: Mutex::new(Vec::new()),
        };

        hook.call(&owner).unwrap();

        assert_eq!(*owner.seen.lock().unwrap(), vec!["called"]);
    }

    #[test]
    fn hook_returns_its_own_error() {
        let hook: Hook<(), String> = Hook::new(|_: &()| Err("denied".to_string()));

        assert_eq!(hook.call(&()), Err("denied".to_string()));
    }

    #[test]
    fn closures_convert_into_hooks() {
        let hook: Hook<u32, ()> = (|n: &u32| if *n > 0 { Ok(()) } else { Err(()) }).into();

        assert!(hook.call(&1).is_ok());
        assert!(hook.call(&0).is_err());
    }

    #[test]
    fn phase_displays_lowercase() {
        assert_eq!(HookPhase::Before.to_string(), "before");
        assert_eq!(HookPhase::After.to_string(), "after");
    }
}
