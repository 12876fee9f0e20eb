//! Core automaton building blocks.
//!
//! This module contains the leaf types the automaton is made of:
//! - `Predicate` guards deciding whether a token may be consumed
//! - `Transition` triples supplied at construction
//! - `State` vertices holding their compiled outgoing edges
//! - `RunState`, the per-run key-value context
//!
//! Nothing here performs I/O; states are immutable once the automaton that
//! owns them has been built.

mod context;
mod predicate;
mod state;
mod transition;

pub use context::RunState;
pub use predicate::Predicate;
pub use state::{Edge, State, StateId};
pub use transition::Transition;
