//! States and their compiled outgoing edges.
//!
//! States live in an arena owned by the automaton. Edges refer to their
//! target by [`StateId`], so states reference each other without owning one
//! another.

use super::predicate::Predicate;
use super::RunState;
use std::fmt;

/// Index of a state inside its automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

impl StateId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Compiled form of a transition, owned by its source state.
#[derive(Debug)]
pub struct Edge<T, C = RunState> {
    pub(crate) predicate: Predicate<T, C>,
    pub(crate) target: StateId,
}

impl<T, C> Edge<T, C> {
    pub fn predicate(&self) -> &Predicate<T, C> {
        &self.predicate
    }

    pub fn target(&self) -> StateId {
        self.target
    }

    /// Whether this edge may consume `token`.
    pub fn accepts(&self, token: &T, ctx: &mut C) -> bool {
        self.predicate.check(token, ctx)
    }
}

/// A named vertex of the automaton.
#[derive(Debug)]
pub struct State<T, C = RunState> {
    pub(crate) name: String,
    pub(crate) is_accept: bool,
    pub(crate) edges: Vec<Edge<T, C>>,
}

impl<T, C> State<T, C> {
    pub(crate) fn new(name: impl Into<String>, is_accept: bool) -> Self {
        Self {
            name: name.into(),
            is_accept,
            edges: Vec::new(),
        }
    }

    pub(crate) fn push_edge(&mut self, predicate: Predicate<T, C>, target: StateId) {
        self.edges.push(Edge { predicate, target });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether exhausting the input here means acceptance.
    pub fn is_accept(&self) -> bool {
        self.is_accept
    }

    /// Outgoing edges in the order they are tried.
    pub fn edges(&self) -> &[Edge<T, C>] {
        &self.edges
    }

    /// Target of the first edge whose predicate accepts `token`.
    ///
    /// Later edges are not evaluated once one matches.
    pub fn next(&self, token: &T, ctx: &mut C) -> Option<StateId> {
        self.edges
            .iter()
            .find(|edge| edge.accepts(token, ctx))
            .map(Edge::target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn state_reports_name_and_accept_flag() {
        let state: State<char> = State::new("Start", true);
        assert_eq!(state.name(), "Start");
        assert!(state.is_accept());
        assert!(state.edges().is_empty());
    }

    #[test]
    fn next_picks_first_matching_edge() {
        let mut state: State<char> = State::new("S", false);
        state.push_edge(Predicate::token(|c: &char| c.is_ascii_digit()), StateId(1));
        state.push_edge(Predicate::token(|_: &char| true), StateId(2));

        let mut ctx = RunState::default();
        assert_eq!(state.next(&'7', &mut ctx), Some(StateId(1)));
        assert_eq!(state.next(&'a', &mut ctx), Some(StateId(2)));
    }

    #[test]
    fn next_stops_evaluating_after_first_match() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);

        let mut state: State<char> = State::new("S", false);
        state.push_edge(Predicate::token(|_: &char| true), StateId(0));
        state.push_edge(
            Predicate::token(move |_: &char| {
                counted.fetch_add(1, Ordering::SeqCst);
                true
            }),
            StateId(1),
        );

        let mut ctx = RunState::default();
        assert_eq!(state.next(&'a', &mut ctx), Some(StateId(0)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn next_is_none_without_match() {
        let mut state: State<char> = State::new("S", false);
        state.push_edge(Predicate::token(|c: &char| *c == 'x'), StateId(0));

        let mut ctx = RunState::default();
        assert_eq!(state.next(&'y', &mut ctx), None);
    }

    #[test]
    fn state_id_displays_index() {
        assert_eq!(StateId(3).to_string(), "#3");
        assert_eq!(StateId(3).index(), 3);
    }
}
