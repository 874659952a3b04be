//! Append-only (from, to) hook tables.

use super::hook::Hook;
use crate::core::State;
use std::collections::HashMap;

/// Hooks keyed by source state, then target state.
///
/// Lists keep registration order and accept duplicates. Nothing is ever
/// removed; a pair is declared as soon as its list exists.
pub struct HookTable<S: State, O, E> {
    hooks: HashMap<S, HashMap<S, Vec<Hook<O, E>>>>,
    // Source states in first-registration order, for stable listings.
    order: Vec<S>,
    targets: HashMap<S, Vec<S>>,
}

impl<S: State, O, E> HookTable<S, O, E> {
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
            order: Vec::new(),
            targets: HashMap::new(),
        }
    }

    /// Append a hook for `(from, to)`.
    pub fn push(&mut self, from: S, to: S, hook: Hook<O, E>) {
        if !self.hooks.contains_key(&from) {
            self.order.push(from.clone());
        }
        let targets = self.targets.entry(from.clone()).or_default();
        let by_target = self.hooks.entry(from).or_default();
        if !by_target.contains_key(&to) {
            targets.push(to.clone());
        }
        by_target.entry(to).or_default().push(hook);
    }

    /// Hooks registered for `(from, to)` in registration order.
    pub fn get(&self, from: &S, to: &S) -> &[Hook<O, E>] {
        self.hooks
            .get(from)
            .and_then(|by_target| by_target.get(to))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether any hook is registered for `(from, to)`.
    pub fn contains(&self, from: &S, to: &S) -> bool {
        !self.get(from, to).is_empty()
    }

    /// Targets with at least one hook from `from`, in first-registration order.
    pub fn targets(&self, from: &S) -> &[S] {
        self.targets.get(from).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Source states with at least one hook, in first-registration order.
    pub fn sources(&self) -> &[S] {
        &self.order
    }

    /// Total number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<S: State, O, E> Default for HookTable<S, O, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, O, E> Clone for HookTable<S, O, E> {
    fn clone(&self) -> Self {
        Self {
            hooks: self.hooks.clone(),
            order: self.order.clone(),
            targets: self.targets.clone(),
        }
    }
}
