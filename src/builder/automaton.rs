//! Builder for constructing automata.

use crate::automaton::{Automaton, BuildError};
use crate::core::{Predicate, RunState, Transition};

/// Builder for constructing automata with a fluent API.
///
/// All validation happens in [`build`](Self::build), which hands the
/// collected specification to [`Automaton::new`].
pub struct AutomatonBuilder<T, C = RunState> {
    states: Vec<String>,
    transitions: Vec<Transition<T, C>>,
    accept: Vec<String>,
    start: Option<String>,
}

impl<T, C> AutomatonBuilder<T, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
            accept: Vec::new(),
            start: None,
        }
    }

    /// Declare a state.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.push(name.into());
        self
    }

    /// Declare several states at once.
    pub fn states<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.states.extend(names.into_iter().map(Into::into));
        self
    }

    /// Mark a declared state as accepting.
    pub fn accept(mut self, name: impl Into<String>) -> Self {
        self.accept.push(name.into());
        self
    }

    pub fn accepts<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.accept.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Add a transition guarded by a token-only predicate.
    pub fn transition<F>(self, from: impl Into<String>, to: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.guarded(from, to, Predicate::token(predicate))
    }

    /// Add a transition whose predicate also receives the run context.
    pub fn transition_with_context<F>(
        self,
        from: impl Into<String>,
        to: impl Into<String>,
        predicate: F,
    ) -> Self
    where
        F: Fn(&T, &mut C) -> bool + Send + Sync + 'static,
    {
        self.guarded(from, to, Predicate::with_context(predicate))
    }

    /// Add a transition with an already constructed predicate.
    pub fn guarded(
        self,
        from: impl Into<String>,
        to: impl Into<String>,
        predicate: Predicate<T, C>,
    ) -> Self {
        self.add_transition(Transition::new(from, to, predicate))
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<T, C>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<T, C>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the automaton.
    /// Returns an error if the start state is missing or the specification
    /// is invalid.
    pub fn build(self) -> Result<Automaton<T, C>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;
        Automaton::new(self.states, self.transitions, self.accept, start)
    }
}

impl<T, C> Default for AutomatonBuilder<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
