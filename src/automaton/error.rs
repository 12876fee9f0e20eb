//! Construction errors for automata.

use thiserror::Error;

/// Errors that can occur when building an automaton.
///
/// Every variant describes an invalid specification. Construction stops at
/// the first violation found and no automaton is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("State has been defined multiple times: {0}")]
    DuplicateState(String),

    #[error("Transition {from} -> {to} references a state that is not declared")]
    UnknownTransitionState { from: String, to: String },

    #[error("Transition is not a unique arrow: {from} -> {to}")]
    DuplicateTransition { from: String, to: String },

    #[error("Accept state {0} is not a declared state")]
    UnknownAcceptState(String),

    #[error("Start state {0} is not a declared state")]
    UnknownStartState(String),

    #[error("Start state not specified. Call .start(name) before .build()")]
    MissingStartState,
}
