//! A value-or-failure container and ternary selection combinators.
//!
//! [`Outcome`] carries either a success value or an opaque error as a single
//! immutable value, so a fallible call's result can be stored, returned or
//! chosen between before anyone inspects it. Its accessors are total: asking a
//! failed outcome for its value yields `T::default()` rather than panicking.
//!
//! The [`select`](mod@select) module provides the conditional combinators:
//! [`select()`] for values that already exist, [`select_with`] for thunks
//! where only the taken branch may run, and [`select_outcome`] for pre-built
//! outcomes.
//!
//! ```
//! use ternary_result::{Outcome, select_outcome};
//!
//! fn parse(raw: &str) -> Outcome<u16, std::num::ParseIntError> {
//!     raw.parse::<u16>().into()
//! }
//!
//! let picked = select_outcome(3 > 1, parse("8080"), parse("not a port"));
//! assert!(picked.is_valid());
//! assert_eq!(picked.value(), 8080);
//! ```

mod outcome;
mod result_ext;
pub mod select;

pub use outcome::{BoxedError, Outcome};
pub use result_ext::IntoOutcome;
pub use select::{Ternary, select, select_outcome, select_outcome_with, select_with};
