//! Token validation.
//!
//! The walk is an explicit loop over the token sequence. At every position
//! the current state's edges are tried in order and the first predicate that
//! accepts the token decides the next state. That choice is final: if the
//! rest of the input later fails, sibling edges are never revisited.

use super::Automaton;
use crate::core::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// Why a token sequence was not accepted.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    /// The input ran out on a state that is not an accept state.
    #[error("Ended on {state} which is not accepting")]
    NotAccepting { state: String },

    /// No outgoing edge of `state` accepted `token`.
    #[error("Ended on {state} with {token} which has no valid transition")]
    NoTransition { state: String, token: String },
}

impl Rejection {
    /// Name of the state the run stopped on.
    pub fn state(&self) -> &str {
        match self {
            Rejection::NotAccepting { state } | Rejection::NoTransition { state, .. } => state,
        }
    }
}

/// Result of validating one token sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Accepted,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Accepted => None,
            Outcome::Rejected(rejection) => Some(rejection),
        }
    }

    /// Human-readable rejection message, absent on acceptance.
    pub fn message(&self) -> Option<String> {
        self.rejection().map(ToString::to_string)
    }

    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            Outcome::Accepted => Ok(()),
            Outcome::Rejected(rejection) => Err(rejection),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Accepted => write!(f, "accepted"),
            Outcome::Rejected(rejection) => write!(f, "rejected: {}", rejection),
        }
    }
}

/// Record of a validation walk, for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Names of the states visited, start state first.
    pub path: Vec<String>,
    /// Number of tokens consumed along an edge.
    pub consumed: usize,
    pub outcome: Outcome,
}

impl<T, C: Default> Automaton<T, C> {
    /// Follow the first edge of `state` whose predicate accepts `token`.
    ///
    /// Returns `None` when no edge matches, or when `state` does not belong
    /// to this automaton.
    pub fn step(&self, state: StateId, token: &T, ctx: &mut C) -> Option<StateId> {
        self.state(state)?.next(token, ctx)
    }

    /// Check whether the automaton accepts `tokens`.
    ///
    /// Tokens are consumed left to right. A fresh `C::default()` context is
    /// created for this call and shared by every predicate it evaluates.
    pub fn validate<'a, I>(&self, tokens: I) -> Outcome
    where
        I: IntoIterator<Item = &'a T>,
        T: fmt::Debug + 'a,
    {
        self.walk(tokens, |_| {}).0
    }

    /// Callback form of [`validate`](Self::validate).
    ///
    /// `callback` is invoked exactly once, with `(true, None)` on acceptance
    /// or `(false, Some(message))` on rejection, and its result is returned.
    pub fn validate_with<'a, I, F, R>(&self, tokens: I, callback: F) -> R
    where
        I: IntoIterator<Item = &'a T>,
        T: fmt::Debug + 'a,
        F: FnOnce(bool, Option<&str>) -> R,
    {
        match self.validate(tokens) {
            Outcome::Accepted => callback(true, None),
            Outcome::Rejected(rejection) => callback(false, Some(&rejection.to_string())),
        }
    }

    /// Validate `tokens` and record the states visited on the way.
    pub fn trace<'a, I>(&self, tokens: I) -> Run
    where
        I: IntoIterator<Item = &'a T>,
        T: fmt::Debug + 'a,
    {
        let mut path = Vec::new();
        let (outcome, consumed) = self.walk(tokens, |id| path.push(self.name_of(id).to_string()));
        Run {
            path,
            consumed,
            outcome,
        }
    }

    fn walk<'a, I, V>(&self, tokens: I, mut visit: V) -> (Outcome, usize)
    where
        I: IntoIterator<Item = &'a T>,
        T: fmt::Debug + 'a,
        V: FnMut(StateId),
    {
        let mut ctx = C::default();
        let mut current = self.start();
        let mut consumed = 0;
        visit(current);

        for token in tokens {
            match self.step(current, token, &mut ctx) {
                Some(next) => {
                    trace!(
                        from = self.name_of(current),
                        to = self.name_of(next),
                        token = ?token,
                        "transition taken"
                    );
                    current = next;
                    consumed += 1;
                    visit(current);
                }
                None => {
                    let rejection = Rejection::NoTransition {
                        state: self.name_of(current).to_string(),
                        token: format!("{:?}", token),
                    };
                    debug!(consumed, %rejection, "token rejected");
                    return (Outcome::Rejected(rejection), consumed);
                }
            }
        }

        let accepting = self.state(current).is_some_and(|s| s.is_accept());
        if accepting {
            debug!(consumed, state = self.name_of(current), "input accepted");
            (Outcome::Accepted, consumed)
        } else {
            let rejection = Rejection::NotAccepting {
                state: self.name_of(current).to_string(),
            };
            debug!(consumed, %rejection, "input rejected");
            (Outcome::Rejected(rejection), consumed)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{RunState, Transition};
    use crate::{Automaton, Outcome, Rejection};

    fn ab() -> Automaton<&'static str> {
        Automaton::new(
            ["A", "B"],
            vec![
                Transition::on("A", "B", |t: &&str| *t == "x"),
                Transition::on("B", "A", |t: &&str| *t == "y"),
            ],
            ["B"],
            "A",
        )
        .unwrap()
    }

    #[test]
    fn accepts_single_x() {
        assert_eq!(ab().validate(&["x"]), Outcome::Accepted);
    }

    #[test]
    fn rejects_when_ending_on_non_accept_state() {
        let outcome = ab().validate(&["x", "y"]);
        assert_eq!(
            outcome,
            Outcome::Rejected(Rejection::NotAccepting { state: "A".into() })
        );
        let message = outcome.message().unwrap();
        assert!(message.contains('A'));
        assert!(message.contains("not accept"));
    }

    #[test]
    fn rejects_unmatched_token() {
        let outcome = ab().validate(&["z"]);
        let rejection = outcome.rejection().unwrap();
        assert_eq!(rejection.state(), "A");
        let message = rejection.to_string();
        assert!(message.contains('A'));
        assert!(message.contains('z'));
        assert!(message.contains("no valid transition"));
    }

    #[test]
    fn empty_input_on_accepting_start_is_accepted() {
        let dfa: Automaton<char> = Automaton::new(["S"], vec![], ["S"], "S").unwrap();
        let empty: [char; 0] = [];
        assert!(dfa.validate(&empty).is_accepted());
    }

    #[test]
    fn empty_input_on_non_accepting_start_is_rejected() {
        let empty: [&str; 0] = [];
        let outcome = ab().validate(&empty);
        assert_eq!(outcome.rejection().map(Rejection::state), Some("A"));
    }

    #[test]
    fn validate_does_not_mutate_input() {
        let tokens = vec!["x", "y", "x"];
        let dfa = ab();
        assert!(dfa.validate(&tokens).is_accepted());
        assert_eq!(tokens, vec!["x", "y", "x"]);
    }

    #[test]
    fn validate_with_calls_back_once() {
        let dfa = ab();
        let mut calls = Vec::new();

        dfa.validate_with(&["x"], |ok, msg| calls.push((ok, msg.map(str::to_string))));
        dfa.validate_with(&["z"], |ok, msg| calls.push((ok, msg.map(str::to_string))));

        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], (true, None));
        assert!(!calls[1].0);
        assert!(calls[1].1.as_deref().unwrap().contains("no valid transition"));
    }

    #[test]
    fn validate_with_returns_callback_value() {
        let accepted = ab().validate_with(&["x"], |ok, _| ok);
        assert!(accepted);
    }

    #[test]
    fn first_match_is_committed() {
        // From S both edges accept 'a'; edges are tried by target name, so
        // "Dead" wins over "Good" and the run cannot recover.
        let dfa: Automaton<char> = Automaton::new(
            ["S", "Dead", "Good"],
            vec![
                Transition::on("S", "Good", |c: &char| *c == 'a'),
                Transition::on("S", "Dead", |c: &char| *c == 'a'),
                Transition::on("Good", "Good", |c: &char| *c == 'b'),
            ],
            ["Good"],
            "S",
        )
        .unwrap();

        let outcome = dfa.validate(&['a', 'b']);
        assert_eq!(
            outcome,
            Outcome::Rejected(Rejection::NoTransition {
                state: "Dead".into(),
                token: "'b'".into(),
            })
        );
    }

    #[test]
    fn context_is_shared_within_a_run() {
        // Accepts sequences of '(' and ')' that end balanced.
        let dfa: Automaton<char> = Automaton::new(
            ["Open", "Closed"],
            vec![
                Transition::on_with_context("Closed", "Open", |c: &char, ctx: &mut RunState| {
                    *c == '(' && ctx.increment("depth") > 0
                }),
                Transition::on_with_context("Open", "Closed", |c: &char, ctx: &mut RunState| {
                    *c == ')' && ctx.counter("depth") == 1 && ctx.decrement("depth") == 0
                }),
                Transition::on_with_context("Open", "Open", |c: &char, ctx: &mut RunState| {
                    match c {
                        '(' => ctx.increment("depth") > 0,
                        ')' => ctx.counter("depth") > 1 && ctx.decrement("depth") > 0,
                        _ => false,
                    }
                }),
            ],
            ["Closed"],
            "Closed",
        )
        .unwrap();

        let tokens: Vec<char> = "(()())".chars().collect();
        assert!(dfa.validate(&tokens).is_accepted());
        let tokens: Vec<char> = "(()".chars().collect();
        assert!(!dfa.validate(&tokens).is_accepted());
    }

    #[test]
    fn context_does_not_leak_between_runs() {
        let dfa: Automaton<char> = Automaton::new(
            ["S"],
            vec![Transition::on_with_context("S", "S", |_: &char, ctx: &mut RunState| {
                ctx.increment("seen") <= 2
            })],
            ["S"],
            "S",
        )
        .unwrap();

        assert!(dfa.validate(&['a', 'a']).is_accepted());
        assert!(dfa.validate(&['a', 'a']).is_accepted());
        assert!(!dfa.validate(&['a', 'a', 'a']).is_accepted());
    }

    #[test]
    fn step_follows_single_edge() {
        let dfa = ab();
        let mut ctx = RunState::default();
        let b = dfa.step(dfa.start(), &"x", &mut ctx).unwrap();
        assert_eq!(dfa.state(b).unwrap().name(), "B");
        assert_eq!(dfa.step(b, &"x", &mut ctx), None);
    }

    #[test]
    fn trace_records_path() {
        let run = ab().trace(&["x", "y", "x"]);
        assert_eq!(run.path, vec!["A", "B", "A", "B"]);
        assert_eq!(run.consumed, 3);
        assert!(run.outcome.is_accepted());
    }

    #[test]
    fn trace_stops_at_rejected_token() {
        let run = ab().trace(&["x", "x", "y"]);
        assert_eq!(run.path, vec!["A", "B"]);
        assert_eq!(run.consumed, 1);
        assert_eq!(run.outcome.rejection().map(Rejection::state), Some("B"));
    }

    #[test]
    fn long_inputs_do_not_grow_the_stack() {
        let dfa: Automaton<u32> = Automaton::new(
            ["Loop"],
            vec![Transition::on("Loop", "Loop", |_: &u32| true)],
            ["Loop"],
            "Loop",
        )
        .unwrap();
        let tokens: Vec<u32> = (0..1_000_000).collect();
        assert!(dfa.validate(&tokens).is_accepted());
    }

    #[test]
    fn outcome_converts_to_result() {
        assert!(ab().validate(&["x"]).into_result().is_ok());
        let err = ab().validate(&["y"]).into_result().unwrap_err();
        assert_eq!(err.state(), "A");
        assert_eq!(Outcome::Accepted.to_string(), "accepted");
    }

    #[test]
    fn run_serializes_to_json() {
        let run = ab().trace(&["x"]);
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["path"], serde_json::json!(["A", "B"]));
        assert_eq!(json["outcome"], serde_json::json!("Accepted"));
    }
}
