//! Test helpers shared across crates.
//!
//! This crate provides a [`call_log::CallLog`] for observing which thunks a
//! combinator invoked, and a [`lookup::Directory`] fixture whose lookups
//! report misses through the conventional `(value, error)` pair.

pub mod call_log;
pub mod lookup;

pub use call_log::CallLog;
pub use lookup::{Directory, LookupError, Record};
