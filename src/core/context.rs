//! Run context threaded through predicate evaluations.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Ephemeral key-value context for a single validation call.
///
/// A fresh, empty `RunState` is created at the start of every call and handed
/// by `&mut` to every context-aware predicate evaluated during that call. It
/// is dropped when the call returns, so nothing leaks between runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    values: HashMap<String, Value>,
}

impl RunState {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Store a value, returning the previous one if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Read an integer counter. Missing or non-integer entries read as 0.
    pub fn counter(&self, key: &str) -> i64 {
        self.values.get(key).and_then(Value::as_i64).unwrap_or(0)
    }

    /// Add one to a counter and return the new value.
    pub fn increment(&mut self, key: &str) -> i64 {
        self.add(key, 1)
    }

    /// Subtract one from a counter and return the new value.
    pub fn decrement(&mut self, key: &str) -> i64 {
        self.add(key, -1)
    }

    /// Add `delta` to a counter and return the new value.
    pub fn add(&mut self, key: &str, delta: i64) -> i64 {
        let next = self.counter(key).saturating_add(delta);
        self.values.insert(key.to_string(), Value::from(next));
        next
    }

    /// Read a boolean flag. Missing or non-boolean entries read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.values.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn set_flag(&mut self, key: &str) {
        self.values.insert(key.to_string(), Value::Bool(true));
    }

    pub fn clear_flag(&mut self, key: &str) {
        self.values.insert(key.to_string(), Value::Bool(false));
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
