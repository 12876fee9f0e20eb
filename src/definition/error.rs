//! Definition error types.

use crate::automaton::BuildError;
use thiserror::Error;

/// Errors that can occur while loading a declarative automaton definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The input text is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Definition is not a JSON object")]
    NotAnObject,

    #[error("Definition is missing field `{0}`")]
    MissingField(&'static str),

    #[error("{field} is not an array")]
    NotAnArray { field: &'static str },

    #[error("Not every state is a string (states[{index}])")]
    StateNotString { index: usize },

    #[error("Transition {index} does not have exactly a `from`, a `to` state, and a predicate")]
    TransitionNotTriple { index: usize },

    #[error("Transition {index} has an entry that is not a string")]
    TransitionFieldNotString { index: usize },

    #[error("Not every accept state is a string (accept_states[{index}])")]
    AcceptStateNotString { index: usize },

    #[error("start_state is not a string")]
    StartStateNotString,

    /// A transition names a predicate the registry does not know
    #[error("Unknown predicate `{name}` on transition {from} -> {to}")]
    UnknownPredicate {
        name: String,
        from: String,
        to: String,
    },

    /// The definition is well formed but describes an invalid automaton
    #[error(transparent)]
    Build(#[from] BuildError),
}
