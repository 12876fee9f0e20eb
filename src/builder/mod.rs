//! Builder API for ergonomic automaton construction.
//!
//! The builder collects states, transitions, accept states and the start
//! state in any order and validates them all at once in `build()`.

mod automaton;

pub use automaton::AutomatonBuilder;

use crate::core::{Predicate, RunState};

/// Predicate accepting exactly one token value.
///
/// # Example
///
/// ```
/// use guarded_dfa::builder::{equals, AutomatonBuilder};
///
/// let dfa = AutomatonBuilder::<char>::new()
///     .states(["A", "B"])
///     .guarded("A", "B", equals('x'))
///     .accept("B")
///     .start("A")
///     .build()
///     .unwrap();
///
/// assert!(dfa.validate(&['x']).is_accepted());
/// ```
pub fn equals<T, C>(expected: T) -> Predicate<T, C>
where
    T: PartialEq + Send + Sync + 'static,
{
    Predicate::token(move |token: &T| *token == expected)
}

/// Predicate accepting any token in `set`.
pub fn one_of<T, C>(set: impl IntoIterator<Item = T>) -> Predicate<T, C>
where
    T: PartialEq + Send + Sync + 'static,
{
    let set: Vec<T> = set.into_iter().collect();
    Predicate::token(move |token: &T| set.contains(token))
}

/// Predicate accepting every token.
pub fn any<T, C>() -> Predicate<T, C> {
    Predicate::token(|_: &T| true)
}

/// Predicate accepting a token only while the run counter `key` is below
/// `limit`, incrementing it on every accepted token.
///
/// ```
/// use guarded_dfa::builder::{at_most, AutomatonBuilder};
///
/// let dfa = AutomatonBuilder::<char>::new()
///     .state("S")
///     .guarded("S", "S", at_most("taken", 2))
///     .accept("S")
///     .start("S")
///     .build()
///     .unwrap();
///
/// assert!(dfa.validate(&['a', 'b']).is_accepted());
/// assert!(!dfa.validate(&['a', 'b', 'c']).is_accepted());
/// ```
pub fn at_most<T>(key: impl Into<String>, limit: i64) -> Predicate<T, RunState> {
    let key = key.into();
    Predicate::with_context(move |_: &T, ctx: &mut RunState| {
        if ctx.counter(&key) < limit {
            ctx.increment(&key);
            true
        } else {
            false
        }
    })
}
