//! Named predicates referenced from definitions.

use crate::core::{Predicate, RunState};
use std::collections::HashMap;

/// Maps predicate names used in a definition to their implementations.
///
/// Only token-only and token-plus-context functions can be registered, so
/// every predicate resolved through a registry has arity 1 or 2.
pub struct PredicateRegistry<T, C = RunState> {
    predicates: HashMap<String, Predicate<T, C>>,
}

impl<T, C> PredicateRegistry<T, C> {
    pub fn new() -> Self {
        Self {
            predicates: HashMap::new(),
        }
    }

    /// Register a token-only predicate under `name`.
    pub fn register<F>(self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.insert(name, Predicate::token(predicate))
    }

    /// Register a predicate that also receives the run context.
    pub fn register_with_context<F>(self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T, &mut C) -> bool + Send + Sync + 'static,
    {
        self.insert(name, Predicate::with_context(predicate))
    }

    /// Register an already constructed predicate, replacing any previous
    /// entry with the same name.
    pub fn insert(mut self, name: impl Into<String>, predicate: Predicate<T, C>) -> Self {
        self.predicates.insert(name.into(), predicate);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Predicate<T, C>> {
        self.predicates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.predicates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl<T, C> Default for PredicateRegistry<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
