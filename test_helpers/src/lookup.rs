//! A fallible lookup fixture returning the conventional `(value, error)` pair.

use thiserror::Error;

/// A named entry stored in a [`Directory`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    /// Display name used as the lookup key.
    pub name: String,
}

impl Record {
    /// Create a record called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Errors produced by [`Directory`] lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No record carries the requested name.
    #[error("no record named '{0}'")]
    NotFound(String),
}

/// In-memory collection of [`Record`]s.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: Vec<Record>,
}

impl Directory {
    /// Build a directory holding one record per name.
    #[must_use]
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: names.into_iter().map(Record::new).collect(),
        }
    }

    /// Look up `name`, reporting a miss as `(None, Some(NotFound))`.
    #[must_use]
    pub fn find(&self, name: &str) -> (Option<&Record>, Option<LookupError>) {
        self.try_find(name)
            .map_or_else(|err| (None, Some(err)), |record| (Some(record), None))
    }

    /// Look up `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] when no record matches.
    pub fn try_find(&self, name: &str) -> Result<&Record, LookupError> {
        self.records
            .iter()
            .find(|record| record.name == name)
            .ok_or_else(|| LookupError::NotFound(name.to_owned()))
    }
}
