//! Extensions for lifting fallible return shapes into [`Outcome`].
//!
//! These helpers let call sites finish an expression with `.into_outcome()`
//! instead of naming the target type:
//!
//! - a [`Result`] keeps its variant and payload;
//! - a `(value, Option<error>)` pair follows [`Outcome::wrap`], so a present
//!   error discards the value.
//!
//! # Examples
//!
//! ```
//! use ternary_result::IntoOutcome;
//!
//! let parsed = "42".parse::<u8>().into_outcome();
//! assert_eq!(parsed.value(), 42);
//!
//! let failed = (9_u8, Some("offline")).into_outcome();
//! assert_eq!(failed.into_pair(), (0, Some("offline")));
//! ```

use crate::Outcome;

/// Conversion into an [`Outcome`] by method call.
pub trait IntoOutcome<T, E> {
    /// Convert `self` into an [`Outcome`].
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }
}

impl<T, E> IntoOutcome<T, E> for (T, Option<E>) {
    fn into_outcome(self) -> Outcome<T, E> {
        let (value, error) = self;
        Outcome::wrap(value, error)
    }
}
