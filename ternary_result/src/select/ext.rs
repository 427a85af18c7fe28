//! Method-call form of the selection combinators.

use super::{select, select_with};

/// Ternary selection as methods on a condition.
///
/// # Examples
///
/// ```
/// use ternary_result::Ternary;
///
/// let retries = 4;
/// assert_eq!((retries > 3).select("give up", "retry"), "give up");
/// assert_eq!((retries > 9).select_with(|| "give up", || "retry"), "retry");
/// ```
pub trait Ternary {
    /// Return `a` when `self` holds, otherwise `b`. See [`select()`].
    #[must_use]
    fn select<T>(self, a: T, b: T) -> T;

    /// Invoke `a` when `self` holds, otherwise `b`. See [`select_with()`].
    #[must_use]
    fn select_with<T, A, B>(self, a: A, b: B) -> T
    where
        A: FnOnce() -> T,
        B: FnOnce() -> T;
}

impl Ternary for bool {
    fn select<T>(self, a: T, b: T) -> T {
        select(self, a, b)
    }

    fn select_with<T, A, B>(self, a: A, b: B) -> T
    where
        A: FnOnce() -> T,
        B: FnOnce() -> T,
    {
        select_with(self, a, b)
    }
}
