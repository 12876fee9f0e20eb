//! Automaton construction.
//!
//! [`Automaton::new`] checks the whole specification up front and only then
//! instantiates states and wires their edges, so a failed construction never
//! leaves a partially built graph behind.

mod error;
mod run;

pub use error::BuildError;
pub use run::{Outcome, Rejection, Run};

use crate::core::{RunState, State, StateId, Transition};
use tracing::debug;

/// An immutable deterministic finite automaton over tokens of type `T`.
///
/// `C` is the run context handed to context-aware predicates. A fresh
/// `C::default()` is created for every validation call.
///
/// # Example
///
/// ```rust
/// use guarded_dfa::{Automaton, Transition};
///
/// let dfa: Automaton<&str> = Automaton::new(
///     ["A", "B"],
///     vec![
///         Transition::on("A", "B", |t: &&str| *t == "x"),
///         Transition::on("B", "A", |t: &&str| *t == "y"),
///     ],
///     ["B"],
///     "A",
/// )
/// .unwrap();
///
/// assert!(dfa.validate(&["x"]).is_accepted());
/// assert!(!dfa.validate(&["x", "y"]).is_accepted());
/// ```
#[derive(Debug)]
pub struct Automaton<T, C = RunState> {
    states: Vec<State<T, C>>,
    start: StateId,
}

impl<T, C> Automaton<T, C> {
    /// Validate a specification and build the automaton from it.
    ///
    /// Checks run in a fixed order and the first violation wins:
    /// duplicate state names, transitions touching undeclared states,
    /// duplicate `(from, to)` pairs, undeclared accept states, and finally an
    /// undeclared start state.
    ///
    /// States are stored sorted by name. Each state's edges are ordered by
    /// the `(from, to)` sort of the transitions, i.e. by target name; this is
    /// the order in which predicates are tried during validation.
    pub fn new<S, A>(
        states: S,
        transitions: Vec<Transition<T, C>>,
        accept_states: A,
        start_state: impl Into<String>,
    ) -> Result<Self, BuildError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let mut names: Vec<String> = states.into_iter().map(Into::into).collect();
        names.sort();
        if let Some(pair) = names.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(BuildError::DuplicateState(pair[0].clone()));
        }
        let declared = |name: &str| names.binary_search_by(|n| n.as_str().cmp(name)).ok();

        for transition in &transitions {
            if declared(transition.from.as_str()).is_none()
                || declared(transition.to.as_str()).is_none()
            {
                return Err(BuildError::UnknownTransitionState {
                    from: transition.from.clone(),
                    to: transition.to.clone(),
                });
            }
        }

        let mut transitions = transitions;
        transitions.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
        if let Some(pair) = transitions
            .windows(2)
            .find(|pair| pair[0].from == pair[1].from && pair[0].to == pair[1].to)
        {
            return Err(BuildError::DuplicateTransition {
                from: pair[0].from.clone(),
                to: pair[0].to.clone(),
            });
        }

        let accept_states: Vec<String> = accept_states.into_iter().map(Into::into).collect();
        if let Some(unknown) = accept_states.iter().find(|a| declared(a.as_str()).is_none()) {
            return Err(BuildError::UnknownAcceptState(unknown.clone()));
        }

        let start_state = start_state.into();
        let start = declared(start_state.as_str())
            .map(StateId)
            .ok_or_else(|| BuildError::UnknownStartState(start_state.clone()))?;

        let mut graph: Vec<State<T, C>> = names
            .iter()
            .map(|name| State::new(name.as_str(), accept_states.contains(name)))
            .collect();

        let edge_count = transitions.len();
        for transition in transitions {
            // Both lookups were checked above.
            let from = declared(transition.from.as_str());
            let to = declared(transition.to.as_str());
            if let (Some(from), Some(to)) = (from, to) {
                graph[from].push_edge(transition.predicate, StateId(to));
            }
        }

        debug!(
            states = graph.len(),
            transitions = edge_count,
            accept = accept_states.len(),
            start = %start_state,
            "automaton built"
        );

        Ok(Self {
            states: graph,
            start,
        })
    }

    /// The start state.
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn state(&self, id: StateId) -> Option<&State<T, C>> {
        self.states.get(id.0)
    }

    /// Look a state up by name.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.states
            .binary_search_by(|s| s.name().cmp(name))
            .ok()
            .map(StateId)
    }

    /// All states, sorted by name.
    pub fn states(&self) -> &[State<T, C>] {
        &self.states
    }

    /// Names of the accept states, sorted.
    pub fn accept_states(&self) -> impl Iterator<Item = &str> {
        self.states
            .iter()
            .filter(|s| s.is_accept())
            .map(State::name)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub(crate) fn name_of(&self, id: StateId) -> &str {
        self.states.get(id.0).map(State::name).unwrap_or("<unknown>")
    }
}
