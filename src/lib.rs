//! guarded-dfa: a small embeddable deterministic finite automaton engine
//!
//! An automaton is built once from named states, guarded transitions, a set of
//! accept states and a start state. It then answers, for any sequence of
//! tokens, whether the sequence is accepted: every token must be consumed by a
//! transition whose predicate matches, and the walk must end on an accept
//! state.
//!
//! # Core Concepts
//!
//! - **Predicate**: the guard on a transition, looking at the token and
//!   optionally at a per-run mutable context
//! - **State**: a named vertex with an accept flag and ordered outgoing edges
//! - **Automaton**: the validated, immutable graph of states
//! - **RunState**: the key-value context created fresh for every validation
//!
//! Construction fails fast with a [`BuildError`] when the specification is
//! invalid. Validation never fails: it returns an [`Outcome`] that is either
//! accepted or carries a [`Rejection`] naming the offending state and token.
//!
//! # Example
//!
//! ```rust
//! use guarded_dfa::{AutomatonBuilder, Outcome};
//!
//! let dfa = AutomatonBuilder::<&str>::new()
//!     .states(["A", "B"])
//!     .transition("A", "B", |t| *t == "x")
//!     .transition("B", "A", |t| *t == "y")
//!     .accept("B")
//!     .start("A")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(dfa.validate(&["x"]), Outcome::Accepted);
//!
//! let outcome = dfa.validate(&["z"]);
//! assert!(outcome.message().unwrap().contains("no valid transition"));
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod definition;

// Re-export commonly used types
pub use automaton::{Automaton, BuildError, Outcome, Rejection, Run};
pub use builder::AutomatonBuilder;
pub use crate::core::{Predicate, RunState, State, StateId, Transition};
pub use definition::{AutomatonDefinition, DefinitionError, PredicateRegistry};
