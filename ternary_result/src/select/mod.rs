//! Ternary selection over values, thunks and outcomes.
//!
//! Every combinator picks purely on the caller's condition. None of them looks
//! at whether an [`Outcome`] alternative succeeded: "which branch" and "did it
//! work" are separate questions.
//!
//! Arguments to [`select()`] and [`select_outcome`] are evaluated by the caller
//! before the call, so any side effects of building the untaken alternative
//! have already happened. Use [`select_with`] or [`select_outcome_with`] when
//! only the chosen branch may run.
//!
//! ```
//! use ternary_result::{Outcome, select_outcome, select_outcome_with};
//!
//! fn primary() -> Result<&'static str, &'static str> { Err("primary down") }
//! fn replica() -> Result<&'static str, &'static str> { Ok("replica") }
//!
//! // Both lookups run; the first is returned even though it failed.
//! let eager = select_outcome(true, Outcome::from(primary()), Outcome::from(replica()));
//! assert_eq!(eager.error(), Some(&"primary down"));
//!
//! // Only `replica` runs.
//! let lazy = select_outcome_with(false, || Outcome::from(primary()), || Outcome::from(replica()));
//! assert_eq!(lazy.value(), "replica");
//! ```

mod ext;

pub use ext::Ternary;

use crate::Outcome;

/// Return `a` when `cond` holds, otherwise `b`.
///
/// ```
/// use ternary_result::select;
///
/// assert_eq!(select(3 > 1, 69, 420), 69);
/// assert_eq!(select(3 < 1, 69, 420), 420);
/// ```
#[must_use]
pub fn select<T>(cond: bool, a: T, b: T) -> T {
    if cond { a } else { b }
}

/// Invoke `a` when `cond` holds, otherwise `b`, and return its value.
///
/// Exactly one thunk runs; the other is dropped without being called.
///
/// ```
/// use ternary_result::select_with;
///
/// let mut calls = Vec::new();
/// let picked = select_with(
///     false,
///     || {
///         calls.push("expensive");
///         1
///     },
///     || 2,
/// );
/// assert_eq!(picked, 2);
/// assert!(calls.is_empty());
/// ```
#[must_use]
pub fn select_with<T, A, B>(cond: bool, a: A, b: B) -> T
where
    A: FnOnce() -> T,
    B: FnOnce() -> T,
{
    tracing::trace!(branch = branch_name(cond), "evaluating deferred branch");
    if cond { a() } else { b() }
}

/// Return outcome `a` when `cond` holds, otherwise `b`.
///
/// Neither outcome is inspected: a failed `a` is still returned when `cond`
/// is true.
pub fn select_outcome<T, E>(cond: bool, a: Outcome<T, E>, b: Outcome<T, E>) -> Outcome<T, E> {
    select(cond, a, b)
}

/// Build only the chosen outcome: invoke `a` when `cond` holds, otherwise
/// `b`.
///
/// This is the deferred counterpart of [`select_outcome`] for fallible calls
/// that must not run when their branch is not taken.
pub fn select_outcome_with<T, E, A, B>(cond: bool, a: A, b: B) -> Outcome<T, E>
where
    A: FnOnce() -> Outcome<T, E>,
    B: FnOnce() -> Outcome<T, E>,
{
    select_with(cond, a, b)
}

const fn branch_name(cond: bool) -> &'static str {
    if cond { "first" } else { "second" }
}
