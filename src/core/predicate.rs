//! Guard predicates for controlling transitions.
//!
//! A predicate decides whether a single token may be consumed along one
//! specific transition. It either looks at the token alone, or at the token
//! together with the run context of the current validation call.

use std::fmt;
use std::sync::Arc;

type TokenFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;
type ContextFn<T, C> = Arc<dyn Fn(&T, &mut C) -> bool + Send + Sync>;

/// Guard attached to a transition.
///
/// The two variants are the only accepted shapes: a predicate takes exactly
/// one parameter (the token) or two (the token and the run context).
/// Cloning a predicate shares the underlying function.
///
/// # Example
///
/// ```rust
/// use guarded_dfa::core::{Predicate, RunState};
///
/// let is_x: Predicate<char> = Predicate::token(|t: &char| *t == 'x');
/// let mut ctx = RunState::default();
///
/// assert!(is_x.check(&'x', &mut ctx));
/// assert!(!is_x.check(&'y', &mut ctx));
/// assert_eq!(is_x.arity(), 1);
/// ```
pub enum Predicate<T, C = super::RunState> {
    /// Looks at the token only.
    Token(TokenFn<T>),
    /// Looks at the token and may read or update the run context.
    WithContext(ContextFn<T, C>),
}

impl<T, C> Predicate<T, C> {
    /// Create a predicate that only inspects the token.
    pub fn token<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Predicate::Token(Arc::new(predicate))
    }

    /// Create a predicate that also receives the run context.
    ///
    /// ```rust
    /// use guarded_dfa::core::{Predicate, RunState};
    ///
    /// // Accept at most two tokens along this edge per run.
    /// let limited: Predicate<char> = Predicate::with_context(|_t: &char, ctx: &mut RunState| {
    ///     ctx.increment("seen") <= 2
    /// });
    /// let mut ctx = RunState::default();
    ///
    /// assert!(limited.check(&'a', &mut ctx));
    /// assert!(limited.check(&'a', &mut ctx));
    /// assert!(!limited.check(&'a', &mut ctx));
    /// ```
    pub fn with_context<F>(predicate: F) -> Self
    where
        F: Fn(&T, &mut C) -> bool + Send + Sync + 'static,
    {
        Predicate::WithContext(Arc::new(predicate))
    }

    /// Number of parameters the predicate declares: 1 or 2.
    pub fn arity(&self) -> usize {
        match self {
            Predicate::Token(_) => 1,
            Predicate::WithContext(_) => 2,
        }
    }

    /// Evaluate the predicate against a token.
    pub fn check(&self, token: &T, ctx: &mut C) -> bool {
        match self {
            Predicate::Token(f) => f(token),
            Predicate::WithContext(f) => f(token, ctx),
        }
    }
}

impl<T, C> Clone for Predicate<T, C> {
    fn clone(&self) -> Self {
        match self {
            Predicate::Token(f) => Predicate::Token(Arc::clone(f)),
            Predicate::WithContext(f) => Predicate::WithContext(Arc::clone(f)),
        }
    }
}

impl<T, C> fmt::Debug for Predicate<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("arity", &self.arity())
            .finish()
    }
}
