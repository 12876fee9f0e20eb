//! Declarative automaton definitions.
//!
//! A definition describes an automaton as plain data, typically JSON, with
//! each transition naming its predicate instead of carrying a function:
//!
//! ```json
//! {
//!   "states": ["A", "B"],
//!   "transitions": [["A", "B", "is_x"], ["B", "A", "is_y"]],
//!   "accept_states": ["B"],
//!   "start_state": "A"
//! }
//! ```
//!
//! [`parse`] checks the shape of untyped input and reports exactly which
//! part is malformed. [`AutomatonDefinition::compile`] then resolves the
//! predicate names through a [`PredicateRegistry`] and builds the automaton.
//!
//! # Example
//!
//! ```rust
//! use guarded_dfa::definition::{self, PredicateRegistry};
//!
//! let registry = PredicateRegistry::<&str>::new()
//!     .register("is_x", |t| *t == "x")
//!     .register("is_y", |t| *t == "y");
//!
//! let dfa = definition::from_json_str(
//!     r#"{"states": ["A", "B"],
//!         "transitions": [["A", "B", "is_x"], ["B", "A", "is_y"]],
//!         "accept_states": ["B"],
//!         "start_state": "A"}"#,
//! )
//! .unwrap()
//! .compile(&registry)
//! .unwrap();
//!
//! assert!(dfa.validate(&["x", "y", "x"]).is_accepted());
//! ```

mod error;
mod registry;

pub use error::DefinitionError;
pub use registry::PredicateRegistry;

use crate::automaton::Automaton;
use crate::core::Transition;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// A transition whose predicate is referenced by name.
///
/// Serialized as a `[from, to, predicate]` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String, String)", into = "(String, String, String)")]
pub struct TransitionDefinition {
    pub from: String,
    pub to: String,
    pub predicate: String,
}

impl From<(String, String, String)> for TransitionDefinition {
    fn from((from, to, predicate): (String, String, String)) -> Self {
        Self {
            from,
            to,
            predicate,
        }
    }
}

impl From<TransitionDefinition> for (String, String, String) {
    fn from(t: TransitionDefinition) -> Self {
        (t.from, t.to, t.predicate)
    }
}

/// An automaton described as data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonDefinition {
    pub states: Vec<String>,
    pub transitions: Vec<TransitionDefinition>,
    pub accept_states: Vec<String>,
    pub start_state: String,
}

impl AutomatonDefinition {
    /// Resolve predicate names and build the automaton.
    ///
    /// Unknown predicate names are reported before any structural check of
    /// [`Automaton::new`] runs.
    pub fn compile<T, C>(
        &self,
        registry: &PredicateRegistry<T, C>,
    ) -> Result<Automaton<T, C>, DefinitionError> {
        let transitions = self
            .transitions
            .iter()
            .map(|t| {
                let predicate = registry.get(&t.predicate).cloned().ok_or_else(|| {
                    DefinitionError::UnknownPredicate {
                        name: t.predicate.clone(),
                        from: t.from.clone(),
                        to: t.to.clone(),
                    }
                })?;
                Ok(Transition::new(t.from.as_str(), t.to.as_str(), predicate))
            })
            .collect::<Result<Vec<_>, DefinitionError>>()?;

        debug!(
            states = self.states.len(),
            transitions = transitions.len(),
            "compiling automaton definition"
        );

        Ok(Automaton::new(
            self.states.iter().map(String::as_str),
            transitions,
            self.accept_states.iter().map(String::as_str),
            self.start_state.as_str(),
        )?)
    }

    pub fn to_json(&self) -> Result<String, DefinitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parse a definition from JSON text.
pub fn from_json_str(text: &str) -> Result<AutomatonDefinition, DefinitionError> {
    let value: Value = serde_json::from_str(text)?;
    parse(&value)
}

/// Check the shape of an untyped definition and convert it.
///
/// The three list fields are checked for being arrays first, then their
/// entries in order: states, transitions, accept states, start state.
pub fn parse(value: &Value) -> Result<AutomatonDefinition, DefinitionError> {
    let object = value.as_object().ok_or(DefinitionError::NotAnObject)?;

    let states = array_field(object, "states")?;
    let transitions = array_field(object, "transitions")?;
    let accept_states = array_field(object, "accept_states")?;

    let states = states
        .iter()
        .enumerate()
        .map(|(index, s)| {
            s.as_str()
                .map(str::to_string)
                .ok_or(DefinitionError::StateNotString { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let transitions = transitions
        .iter()
        .enumerate()
        .map(|(index, t)| parse_transition(index, t))
        .collect::<Result<Vec<_>, _>>()?;

    let accept_states = accept_states
        .iter()
        .enumerate()
        .map(|(index, s)| {
            s.as_str()
                .map(str::to_string)
                .ok_or(DefinitionError::AcceptStateNotString { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let start_state = object
        .get("start_state")
        .ok_or(DefinitionError::MissingField("start_state"))?
        .as_str()
        .ok_or(DefinitionError::StartStateNotString)?
        .to_string();

    Ok(AutomatonDefinition {
        states,
        transitions,
        accept_states,
        start_state,
    })
}

fn array_field<'v>(
    object: &'v Map<String, Value>,
    field: &'static str,
) -> Result<&'v Vec<Value>, DefinitionError> {
    object
        .get(field)
        .ok_or(DefinitionError::MissingField(field))?
        .as_array()
        .ok_or(DefinitionError::NotAnArray { field })
}

fn parse_transition(index: usize, value: &Value) -> Result<TransitionDefinition, DefinitionError> {
    let parts = value
        .as_array()
        .filter(|parts| parts.len() == 3)
        .ok_or(DefinitionError::TransitionNotTriple { index })?;

    let field = |i: usize| {
        parts[i]
            .as_str()
            .map(str::to_string)
            .ok_or(DefinitionError::TransitionFieldNotString { index })
    };

    Ok(TransitionDefinition {
        from: field(0)?,
        to: field(1)?,
        predicate: field(2)?,
    })
}
