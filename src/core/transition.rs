//! Spec-form transitions supplied at construction.

use super::predicate::Predicate;
use super::RunState;

/// A `(from, to, predicate)` triple describing one guarded arrow.
///
/// Transitions are consumed by [`Automaton::new`](crate::Automaton::new),
/// which compiles them into edges owned by their source state.
#[derive(Debug)]
pub struct Transition<T, C = RunState> {
    /// Name of the state the transition leaves.
    pub from: String,
    /// Name of the state the transition enters.
    pub to: String,
    /// Guard deciding whether a token may be consumed along this arrow.
    pub predicate: Predicate<T, C>,
}

impl<T, C> Transition<T, C> {
    pub fn new(from: impl Into<String>, to: impl Into<String>, predicate: Predicate<T, C>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            predicate,
        }
    }

    /// Transition guarded by a token-only predicate.
    pub fn on<F>(from: impl Into<String>, to: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::new(from, to, Predicate::token(predicate))
    }

    /// Transition guarded by a predicate that also sees the run context.
    pub fn on_with_context<F>(from: impl Into<String>, to: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T, &mut C) -> bool + Send + Sync + 'static,
    {
        Self::new(from, to, Predicate::with_context(predicate))
    }
}
